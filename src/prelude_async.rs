//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async-specific items.
//!
//! # Usage
//!
//! ```ignore
//! use error_boundary::prelude_async::*;
//!
//! async fn on_refresh(boundary: &Boundary<ApiError>) -> Option<Rows> {
//!     fetch_rows().within(boundary).await.ok().flatten()
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`callback!`], [`impl_termination_class!`]
//! - **Types**: [`Boundary`], [`Fallback`], [`Fault`], [`Callback`], [`Signal`]
//! - **Traits**: [`TerminationClass`], [`ResultBoundaryExt`], [`ErrorHook`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureBoundaryExt`](crate::async_ext::FutureBoundaryExt) - `.within()` for futures
//! - **Types**: [`GuardedFuture`](crate::async_ext::GuardedFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureBoundaryExt, GuardedFuture};
