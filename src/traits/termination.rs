//! Termination classification for boundary interception.
//!
//! This module provides the [`TerminationClass`] trait for separating
//! *termination conditions* (a request to stop: user interrupt, process exit,
//! teardown of the host's callback machinery) from *ordinary errors* (faults
//! in application logic).
//!
//! A [`Boundary`](crate::Boundary) intercepts ordinary errors and never
//! intercepts termination conditions. Intercepting a stop request would make
//! the host impossible to shut down.
//!
//! # Examples
//!
//! ```
//! use error_boundary::traits::TerminationClass;
//!
//! #[derive(Debug)]
//! enum AppError {
//!     Database(String),
//!     InvalidInput,
//!     Shutdown,
//! }
//!
//! impl TerminationClass for AppError {
//!     fn is_termination(&self) -> bool {
//!         matches!(self, AppError::Shutdown)
//!     }
//! }
//!
//! assert!(AppError::Shutdown.is_termination());
//! assert!(AppError::InvalidInput.is_ordinary());
//! ```

use core::convert::Infallible;

use crate::types::alloc_type::{Box, String};
use crate::types::{ErrorClass, Signal};

/// Classification of errors as termination conditions or ordinary errors.
///
/// Every error type flowing through a [`Boundary`](crate::Boundary) must
/// implement this trait. Most application errors only need the one-line
/// answer "never a termination":
///
/// ```
/// use error_boundary::traits::TerminationClass;
///
/// #[derive(Debug)]
/// struct RenderError;
///
/// impl TerminationClass for RenderError {
///     fn is_termination(&self) -> bool {
///         false
///     }
/// }
/// ```
///
/// # Guidelines
///
/// Return `true` only for requests to stop execution:
/// - user-initiated interrupts
/// - explicit process exit requests
/// - shutdown of the runtime that owns the callback
///
/// Return `false` for everything that is a fault, however severe.
pub trait TerminationClass {
    /// Returns `true` if this value is a request to stop execution.
    fn is_termination(&self) -> bool;

    /// Returns `true` if this value is an ordinary, interceptable error.
    ///
    /// Default implementation returns `!self.is_termination()`.
    #[inline]
    fn is_ordinary(&self) -> bool {
        !self.is_termination()
    }

    /// Returns the [`ErrorClass`] of this value.
    #[inline]
    fn class(&self) -> ErrorClass {
        if self.is_termination() {
            ErrorClass::Termination
        } else {
            ErrorClass::Ordinary
        }
    }
}

impl TerminationClass for Signal {
    #[inline]
    fn is_termination(&self) -> bool {
        true
    }
}

impl TerminationClass for Infallible {
    fn is_termination(&self) -> bool {
        match *self {}
    }
}

impl TerminationClass for &str {
    #[inline]
    fn is_termination(&self) -> bool {
        false
    }
}

impl TerminationClass for String {
    #[inline]
    fn is_termination(&self) -> bool {
        false
    }
}

impl TerminationClass for core::fmt::Error {
    #[inline]
    fn is_termination(&self) -> bool {
        false
    }
}

/// Boxed errors are ordinary unless they carry a [`Signal`], as produced by
/// `Err(Signal::Interrupt)?` in a function returning a boxed error.
impl TerminationClass for Box<dyn core::error::Error + Send + Sync> {
    #[inline]
    fn is_termination(&self) -> bool {
        self.downcast_ref::<Signal>().is_some()
    }
}

/// I/O errors are faults, including `ErrorKind::Interrupted`, which signals a
/// retryable syscall rather than a user interrupt. An I/O error wrapping a
/// [`Signal`] (`io::Error::other(Signal::Exit(3))`) is a termination.
#[cfg(feature = "std")]
impl TerminationClass for std::io::Error {
    #[inline]
    fn is_termination(&self) -> bool {
        self.get_ref().is_some_and(|inner| inner.downcast_ref::<Signal>().is_some())
    }
}
