//! Async extensions for the boundary.
//!
//! Host runtimes increasingly dispatch UI callbacks as futures. This module
//! applies the same interception core when such a future completes.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-boundary = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_boundary::prelude_async::*;
//!
//! async fn on_refresh(boundary: &Boundary<ApiError>) {
//!     if let Ok(Some(rows)) = fetch_rows().within(boundary).await {
//!         render(rows);
//!     }
//! }
//! ```

mod future_ext;
mod guarded_future;

pub use future_ext::FutureBoundaryExt;
pub use guarded_future::GuardedFuture;
