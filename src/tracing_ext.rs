//! Tracing integration for the boundary.
//!
//! The boundary itself never logs. This module provides a ready-made hook and
//! message sink that report through the `tracing` ecosystem.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-boundary = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_boundary::tracing_ext::TracingSink;
//! use error_boundary::Boundary;
//!
//! let boundary = Boundary::<AppError>::builder("Something went wrong.")
//!     .trace_faults()
//!     .sink(TracingSink)
//!     .build();
//! ```

use core::fmt::Display;

use crate::traits::TerminationClass;
use crate::types::{ErrorHook, Fault, FaultOrigin, MessageSink};

/// Target of every event emitted by this module.
pub const TARGET: &str = "error_boundary";

/// An [`ErrorHook`] emitting one `ERROR` event per intercepted fault.
///
/// Fields: `origin` (`error` or `panic`), `class`, and `fault` (the
/// `Display` rendering). When constructed with [`TracingHook::with_label`],
/// `boundary` names the boundary the event came from.
#[derive(Debug, Clone, Default)]
pub struct TracingHook {
    label: Option<&'static str>,
}

impl TracingHook {
    /// Creates an unlabeled hook.
    #[inline]
    pub const fn new() -> Self {
        Self { label: None }
    }

    /// Creates a hook that tags events with `boundary = label`.
    #[inline]
    pub const fn with_label(label: &'static str) -> Self {
        Self { label: Some(label) }
    }

    /// Returns the label, if any.
    #[inline]
    pub const fn label(&self) -> Option<&'static str> {
        self.label
    }
}

impl<E> ErrorHook<E> for TracingHook
where
    E: Display + TerminationClass,
{
    fn on_error(&self, fault: &Fault<E>) {
        let origin = match fault.origin() {
            FaultOrigin::Error => "error",
            FaultOrigin::Panic => "panic",
        };
        let class = fault.class();

        match self.label {
            Some(label) => tracing::error!(
                target: TARGET,
                boundary = label,
                origin,
                class = %class,
                fault = %fault,
                "fault intercepted"
            ),
            None => tracing::error!(
                target: TARGET,
                origin,
                class = %class,
                fault = %fault,
                "fault intercepted"
            ),
        }
    }
}

/// A [`MessageSink`] recording fallback messages as `WARN` events.
///
/// For headless hosts (tests, batch runners) that have no screen to show a
/// fallback on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn show_error(&self, message: &str) {
        tracing::warn!(target: TARGET, fallback = message, "fallback shown");
    }
}
