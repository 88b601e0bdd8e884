//! Tower integration for the boundary.
//!
//! This module provides a Tower `Layer` and `Service` that guard every call
//! of the wrapped service with a [`Boundary`]: ordinary errors run the hooks
//! and the fallback and turn into `Ok(None)`, termination-class errors pass
//! through as `Err`.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-boundary = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_boundary::tower::BoundaryLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(BoundaryLayer::new(boundary.clone()))
//!     .service(action_handler);
//! ```

use core::fmt::{Debug, Formatter};
use core::task::{Context, Poll};

use tower::{Layer, Service};

use crate::async_ext::GuardedFuture;
use crate::traits::TerminationClass;
use crate::Boundary;

/// A Tower [`Layer`] guarding service calls with a [`Boundary`].
///
/// Every service produced by the layer shares the same boundary.
pub struct BoundaryLayer<E> {
    boundary: Boundary<E>,
}

impl<E> BoundaryLayer<E> {
    /// Creates a new `BoundaryLayer`.
    #[inline]
    pub const fn new(boundary: Boundary<E>) -> Self {
        Self { boundary }
    }

    /// Returns a reference to the boundary.
    #[inline]
    pub const fn boundary(&self) -> &Boundary<E> {
        &self.boundary
    }
}

impl<E> Clone for BoundaryLayer<E> {
    fn clone(&self) -> Self {
        Self { boundary: self.boundary.clone() }
    }
}

impl<E> Debug for BoundaryLayer<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundaryLayer").field("boundary", &self.boundary).finish()
    }
}

impl<S, E> Layer<S> for BoundaryLayer<E> {
    type Service = BoundaryService<S, E>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        BoundaryService::new(inner, self.boundary.clone())
    }
}

/// A Tower [`Service`] whose calls are guarded by a [`Boundary`].
///
/// `Response` becomes `Option<S::Response>`; `None` means the call failed and
/// the fallback was shown. Readiness errors from `poll_ready` are returned
/// unchanged, since no call was attempted. The boundary guards the response
/// future; the synchronous part of `S::call` runs unguarded.
pub struct BoundaryService<S, E> {
    inner: S,
    boundary: Boundary<E>,
}

impl<S, E> BoundaryService<S, E> {
    /// Creates a new `BoundaryService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S, boundary: Boundary<E>) -> Self {
        Self { inner, boundary }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Returns a reference to the boundary.
    #[inline]
    pub const fn boundary(&self) -> &Boundary<E> {
        &self.boundary
    }
}

impl<S: Clone, E> Clone for BoundaryService<S, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone(), boundary: self.boundary.clone() }
    }
}

impl<S: Debug, E> Debug for BoundaryService<S, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundaryService")
            .field("inner", &self.inner)
            .field("boundary", &self.boundary)
            .finish()
    }
}

impl<S, E, Request> Service<Request> for BoundaryService<S, E>
where
    S: Service<Request, Error = E>,
    E: TerminationClass,
{
    type Response = Option<S::Response>;
    type Error = E;
    type Future = GuardedFuture<S::Future, E>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        GuardedFuture::new(self.inner.call(request), self.boundary.clone())
    }
}

/// Extension trait for guarding services with a boundary.
pub trait ServiceBoundaryExt<Request>: Service<Request> + Sized {
    /// Wraps this service so that every call is guarded by `boundary`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_boundary::tower::ServiceBoundaryExt;
    ///
    /// let guarded = on_click_service.within_boundary(boundary.clone());
    /// ```
    fn within_boundary(self, boundary: Boundary<Self::Error>) -> BoundaryService<Self, Self::Error> {
        BoundaryService::new(self, boundary)
    }
}

impl<S, Request> ServiceBoundaryExt<Request> for S where S: Service<Request> {}
