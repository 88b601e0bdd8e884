//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_boundary::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`callback!`], [`impl_termination_class!`]
//! - **Types**: [`Boundary`], [`Fallback`], [`Fault`], [`Callback`], [`Signal`]
//! - **Traits**: [`TerminationClass`], [`ResultBoundaryExt`], [`ErrorHook`]
//! - **Type Alias**: [`Outcome`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use error_boundary::prelude::*;
//!
//! #[derive(Debug)]
//! struct LoadError;
//! impl_termination_class!(LoadError);
//!
//! fn load_report() -> Result<String, LoadError> {
//!     Err(LoadError)
//! }
//!
//! let boundary = Boundary::builder("Report unavailable.").message_sink(|_| {}).build();
//! let outcome: Outcome<String, LoadError> = boundary.call(load_report);
//! assert!(matches!(outcome, Ok(None)));
//! ```

// Macros
pub use crate::{callback, impl_termination_class};

// Core types
pub use crate::boundary::Boundary;
pub use crate::types::{hook, Callback, Fallback, Fault, Outcome, Signal};

// Traits
pub use crate::traits::{ResultBoundaryExt, TerminationClass};
pub use crate::types::ErrorHook;
