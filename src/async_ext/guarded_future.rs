//! Future wrapper applying a boundary on completion.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::traits::TerminationClass;
use crate::types::Outcome;
use crate::Boundary;

pin_project! {
    /// A future guarded by a [`Boundary`].
    ///
    /// Resolves to the same [`Outcome`] a synchronous
    /// [`Boundary::call`] would produce: `Ok(Some(value))` on success,
    /// `Ok(None)` after hooks and fallback ran for an ordinary failure, and
    /// `Err(error)` for a termination-class error. A panic raised while
    /// polling the inner future is intercepted like a synchronous one.
    ///
    /// Hooks and the fallback run inside the `poll` that observes the
    /// failure, on the executor's thread. Nothing is spawned.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the future before completion runs no hooks and no fallback.
    #[must_use = "futures do nothing unless polled"]
    pub struct GuardedFuture<F, E> {
        #[pin]
        inner: F,
        boundary: Option<Boundary<E>>,
    }
}

impl<F, E> GuardedFuture<F, E> {
    /// Creates a guarded future.
    #[inline]
    pub fn new(inner: F, boundary: Boundary<E>) -> Self {
        Self { inner, boundary: Some(boundary) }
    }
}

impl<F, T, E> Future for GuardedFuture<F, E>
where
    F: Future<Output = Result<T, E>>,
    E: TerminationClass,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let boundary =
            this.boundary.as_ref().expect("GuardedFuture polled after completion; this is a bug");

        let outcome = match boundary.guarded(|| this.inner.as_mut().poll(cx)) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(result)) => boundary.resolve(result),
            Err(fault) => {
                boundary.intercept(&fault);
                Ok(None)
            },
        };

        *this.boundary = None;
        Poll::Ready(outcome)
    }
}

impl<F, T, E> FusedFuture for GuardedFuture<F, E>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: TerminationClass,
{
    fn is_terminated(&self) -> bool {
        self.boundary.is_none() || self.inner.is_terminated()
    }
}

impl<E> Boundary<E> {
    /// Guards a future with this boundary.
    ///
    /// ```
    /// use error_boundary::Boundary;
    ///
    /// # tokio_test_block_on(async {
    /// let boundary = Boundary::<String>::builder("Oops").message_sink(|_| {}).build();
    /// let outcome = boundary.guard_future(async { Err::<(), _>("timeout".to_string()) }).await;
    /// assert_eq!(outcome, Ok(None));
    /// # });
    /// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
    /// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
    /// # }
    /// ```
    #[inline]
    pub fn guard_future<F>(&self, future: F) -> GuardedFuture<F, E> {
        GuardedFuture::new(future, self.clone())
    }
}
