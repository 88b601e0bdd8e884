//! The error boundary: interception, hook dispatch and fallback dispatch.
//!
//! A [`Boundary`] is configured once and shared by every function it guards.
//! Each guarded invocation ends in exactly one of three ways:
//!
//! | Wrapped function | Hooks | Fallback | Outcome |
//! |------------------|-------|----------|---------|
//! | `Ok(value)` | - | - | `Ok(Some(value))` |
//! | termination (`Err` with [`TerminationClass::is_termination`], or a raised [`Signal`](crate::Signal)) | - | - | propagated unchanged |
//! | anything else (ordinary `Err`, panic) | all, in order | once | `Ok(None)` |
//!
//! # Examples
//!
//! ```
//! use error_boundary::Boundary;
//! use std::sync::{Arc, Mutex};
//!
//! let shown = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&shown);
//!
//! let boundary = Boundary::<String>::builder("Something went wrong.")
//!     .on_error(|fault| eprintln!("audit: {fault}"))
//!     .message_sink(move |message| sink.lock().unwrap().push(message.to_owned()))
//!     .build();
//!
//! assert_eq!(boundary.call(|| Ok::<_, String>(2 + 2)), Ok(Some(4)));
//! assert_eq!(boundary.call(|| Err::<i32, _>("db down".to_string())), Ok(None));
//! assert_eq!(*shown.lock().unwrap(), ["Something went wrong."]);
//! ```

mod builder;
mod unwind;

pub use builder::BoundaryBuilder;

use core::fmt::{Debug, Formatter};

use crate::traits::TerminationClass;
use crate::types::alloc_type::Arc;
use crate::types::{BoxedSink, Callback, Fallback, Fault, Hooks, Outcome};

/// Interception policy wrapping application logic.
///
/// Cloning is cheap and every clone shares the same immutable configuration.
/// `Boundary<E>` is `Send + Sync`; one instance can guard every entry point
/// and callback of an application.
pub struct Boundary<E> {
    inner: Arc<Inner<E>>,
}

struct Inner<E> {
    hooks: Hooks<E>,
    fallback: Fallback<E>,
    sink: BoxedSink,
    catch_panics: bool,
}

impl<E> Boundary<E> {
    /// Creates a boundary from hooks and a fallback.
    ///
    /// `on_error` accepts a single boxed hook, an array, a `Vec`, or a
    /// [`Hooks`] value. The sequence is fixed here; its order is the
    /// execution order. Nothing is invoked during construction.
    ///
    /// ```
    /// use error_boundary::{hook, Boundary, Fallback};
    ///
    /// let single = Boundary::<&str>::new(hook(|fault| eprintln!("{fault}")), "Oops");
    /// assert_eq!(single.hooks().len(), 1);
    ///
    /// let many = Boundary::<&str>::new(
    ///     [hook(|_| {}), hook(|_| {})],
    ///     Fallback::render(|_| eprintln!("custom fallback")),
    /// );
    /// assert_eq!(many.hooks().len(), 2);
    /// assert!(many.fallback().is_renderer());
    /// ```
    pub fn new(on_error: impl Into<Hooks<E>>, fallback: impl Into<Fallback<E>>) -> Self {
        Self::builder(fallback).hooks(on_error.into()).build()
    }

    /// Starts configuring a boundary around the given fallback.
    #[inline]
    pub fn builder(fallback: impl Into<Fallback<E>>) -> BoundaryBuilder<E> {
        BoundaryBuilder::new(fallback.into())
    }

    /// Returns the configured hooks in execution order.
    #[inline]
    pub fn hooks(&self) -> &Hooks<E> {
        &self.inner.hooks
    }

    /// Returns the configured fallback.
    #[inline]
    pub fn fallback(&self) -> &Fallback<E> {
        &self.inner.fallback
    }

    /// Returns `true` if panics in wrapped functions are intercepted.
    #[inline]
    pub fn catches_panics(&self) -> bool {
        self.inner.catch_panics
    }

    /// Runs every hook, then the fallback, for an already-captured fault.
    ///
    /// This is what a guarded call does after an ordinary failure. Hook
    /// panics are swallowed one by one; a [`Signal`](crate::Signal) raised by
    /// a hook skips the remaining hooks and the fallback. Fallback panics
    /// propagate.
    pub fn intercept(&self, fault: &Fault<E>) {
        for hook in self.inner.hooks.iter() {
            let _ = unwind::capture(|| hook.on_error(fault));
        }
        self.inner.fallback.show(fault, self.inner.sink.as_ref());
    }

    /// Runs `f` as the panic-guarded body of an invocation.
    pub(crate) fn guarded<R>(&self, f: impl FnOnce() -> R) -> Result<R, Fault<E>> {
        if self.inner.catch_panics {
            unwind::capture(f).map_err(Fault::Panic)
        } else {
            Ok(f())
        }
    }
}

impl<E: TerminationClass> Boundary<E> {
    /// Invokes `f` once under the boundary.
    ///
    /// ```
    /// use error_boundary::{Boundary, Signal};
    ///
    /// let boundary = Boundary::<Signal>::builder("Oops").message_sink(|_| {}).build();
    ///
    /// assert_eq!(boundary.call(|| Ok("rendered")), Ok(Some("rendered")));
    /// assert_eq!(boundary.call(|| -> Result<(), Signal> { panic!("bug") }), Ok(None));
    /// assert_eq!(boundary.call(|| Err::<(), _>(Signal::Interrupt)), Err(Signal::Interrupt));
    /// ```
    pub fn call<T, F>(&self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self.guarded(f) {
            Ok(result) => self.resolve(result),
            Err(fault) => {
                self.intercept(&fault);
                Ok(None)
            },
        }
    }

    /// Applies the boundary to a result that has already been produced.
    pub fn resolve<T>(&self, result: Result<T, E>) -> Outcome<T, E> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_termination() => Err(error),
            Err(error) => {
                self.intercept(&Fault::Error(error));
                Ok(None)
            },
        }
    }

    /// Wraps a zero-argument function for direct invocation.
    ///
    /// ```
    /// use error_boundary::Boundary;
    ///
    /// let boundary = Boundary::<String>::builder("Oops").message_sink(|_| {}).build();
    /// let main = boundary.decorate(|| Err::<(), _>("unreachable db".to_string()));
    ///
    /// assert_eq!(main(), Ok(None));
    /// ```
    pub fn decorate<T, F>(&self, f: F) -> impl Fn() -> Outcome<T, E>
    where
        F: Fn() -> Result<T, E>,
    {
        let boundary = self.clone();
        move || boundary.call(&f)
    }

    /// Wraps a one-argument function for direct invocation.
    ///
    /// Pass a tuple for several arguments.
    ///
    /// ```
    /// use error_boundary::Boundary;
    ///
    /// let boundary = Boundary::<String>::builder("Oops").message_sink(|_| {}).build();
    /// let divide = boundary.decorate_with(|(a, b): (i32, i32)| {
    ///     a.checked_div(b).ok_or_else(|| "division by zero".to_string())
    /// });
    ///
    /// assert_eq!(divide((6, 3)), Ok(Some(2)));
    /// assert_eq!(divide((1, 0)), Ok(None));
    /// ```
    pub fn decorate_with<A, T, F>(&self, f: F) -> impl Fn(A) -> Outcome<T, E>
    where
        F: Fn(A) -> Result<T, E>,
    {
        let boundary = self.clone();
        move |arg| boundary.call(|| f(arg))
    }

    /// Wraps a callback that the host runtime will invoke later.
    ///
    /// The returned callback has the same interception behavior as
    /// [`decorate`](Self::decorate) and carries a copy of the original's
    /// name and documentation.
    ///
    /// ```
    /// use error_boundary::{callback, Boundary};
    ///
    /// fn on_submit() -> Result<(), String> {
    ///     Err("form invalid".to_string())
    /// }
    ///
    /// let boundary = Boundary::<String>::builder("Oops").message_sink(|_| {}).build();
    /// let wrapped = boundary.wrap_callback(callback!(on_submit, "Submits the form."));
    ///
    /// assert_eq!(wrapped.name(), "on_submit");
    /// assert_eq!(wrapped.doc(), Some("Submits the form."));
    /// assert_eq!(wrapped.call(), Ok(None));
    /// ```
    pub fn wrap_callback<T, F>(&self, callback: Callback<F>) -> Callback<impl Fn() -> Outcome<T, E>>
    where
        F: Fn() -> Result<T, E>,
    {
        let boundary = self.clone();
        callback.map(move |f| move || boundary.call(&f))
    }

    /// Wraps a one-argument callback that the host runtime will invoke later.
    pub fn wrap_callback_with<A, T, F>(
        &self,
        callback: Callback<F>,
    ) -> Callback<impl Fn(A) -> Outcome<T, E>>
    where
        F: Fn(A) -> Result<T, E>,
    {
        let boundary = self.clone();
        callback.map(move |f| move |arg| boundary.call(|| f(arg)))
    }
}

impl<E> Clone for Boundary<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E> Debug for Boundary<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Boundary")
            .field("hooks", &self.inner.hooks)
            .field("fallback", &self.inner.fallback)
            .field("catch_panics", &self.inner.catch_panics)
            .finish()
    }
}
