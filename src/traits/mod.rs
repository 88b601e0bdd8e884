//! Core traits of the boundary.
//!
//! - [`TerminationClass`]: separates termination requests from ordinary errors
//! - [`ResultBoundaryExt`]: resolves an existing `Result` under a boundary
//!
//! The capability traits for hooks, renderers and message sinks live next to
//! the types that hold them, in [`crate::types`].
//!
//! # Examples
//!
//! ```
//! use error_boundary::traits::TerminationClass;
//! use error_boundary::{ErrorClass, Signal};
//!
//! assert_eq!(Signal::Interrupt.class(), ErrorClass::Termination);
//! assert_eq!("timeout".class(), ErrorClass::Ordinary);
//! ```

pub mod boundary_ext;
pub mod termination;

pub use boundary_ext::ResultBoundaryExt;
pub use termination::TerminationClass;
