//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.within()` for futures, mirroring the sync
//! [`ResultBoundaryExt`](crate::traits::ResultBoundaryExt).

use core::future::Future;

use crate::Boundary;

use super::guarded_future::GuardedFuture;

/// Extension trait for guarding async callbacks with a [`Boundary`].
///
/// # Examples
///
/// ```rust,no_run
/// use error_boundary::prelude_async::*;
///
/// async fn save_draft(text: String) -> Result<usize, String> {
///     Err(format!("cannot save {} bytes", text.len()))
/// }
///
/// async fn on_save(boundary: &Boundary<String>) -> Option<usize> {
///     save_draft("hello".into()).within(boundary).await.ok().flatten()
/// }
/// ```
pub trait FutureBoundaryExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Guards this future with `boundary`.
    ///
    /// The boundary is cloned into the future; it applies when the future
    /// completes.
    #[inline]
    fn within(self, boundary: &Boundary<E>) -> GuardedFuture<Self, E> {
        GuardedFuture::new(self, boundary.clone())
    }
}

impl<F, T, E> FutureBoundaryExt<T, E> for F where F: Future<Output = Result<T, E>> {}
