//! Error boundaries for interactive UI callbacks.
//!
//! A [`Boundary`] wraps application logic so that a failure inside it never
//! reaches the host UI runtime as a crash or a leaked stack trace. The failure
//! is reported through an ordered list of hooks (audit log, metrics,
//! notifications) and replaced by a safe fallback: a plain message or a
//! custom renderer.
//!
//! Each module re-exports its public surface from here, so consumers can
//! simply depend on `error_boundary::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Guarding an Entry Point
//!
//! ```
//! use error_boundary::Boundary;
//!
//! let boundary = Boundary::<String>::builder("An error occurred. Please try again.")
//!     .on_error(|fault| eprintln!("audit: {fault}"))
//!     .message_sink(|message| eprintln!("[banner] {message}"))
//!     .build();
//!
//! let main = boundary.decorate(|| {
//!     let clicked = true;
//!     if clicked {
//!         return Err("test error".to_string());
//!     }
//!     Ok("rendered")
//! });
//!
//! // The hook ran, the banner was shown, and no error escaped.
//! assert_eq!(main(), Ok(None));
//! ```
//!
//! ## Guarding a Callback
//!
//! ```
//! use error_boundary::{callback, Boundary, Fallback};
//!
//! fn trigger_error() -> Result<(), String> {
//!     Err("division by zero".to_string())
//! }
//!
//! let boundary = Boundary::<String>::builder(Fallback::render(|_| {
//!     eprintln!("An unexpected error occurred. Please contact support.");
//! }))
//! .build();
//!
//! let on_click = boundary.wrap_callback(callback!(trigger_error));
//! assert_eq!(on_click.name(), "trigger_error");
//! assert_eq!(on_click.call(), Ok(None));
//! ```
//!
//! ## Termination Passes Through
//!
//! ```
//! use error_boundary::{Boundary, Signal};
//!
//! let boundary = Boundary::<Signal>::builder("Oops")
//!     .on_error(|_| unreachable!("termination never reaches hooks"))
//!     .build();
//!
//! assert_eq!(boundary.call(|| Err::<(), _>(Signal::Exit(1))), Err(Signal::Exit(1)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The boundary: interception, hook dispatch and fallback dispatch
pub mod boundary;
/// Macros for callback metadata and error classification
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: termination classification and result extensions
pub mod traits;
/// Faults, hooks, fallbacks, callbacks and signals
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration - ready-made hook and sink (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use boundary::{Boundary, BoundaryBuilder};
pub use traits::*;
pub use types::{
    hook, BoxedHook, BoxedSink, Callback, CallbackMeta, DiscardSink, ErrorClass, ErrorHook,
    Fallback, FallbackRenderer, Fault, FaultOrigin, FaultReport, Hooks, MessageSink, Outcome,
    PanicMessage, Signal,
};

#[cfg(feature = "std")]
pub use types::StderrSink;
