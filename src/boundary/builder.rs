use crate::types::alloc_type::{Arc, Box};
use crate::types::fallback::default_sink;
use crate::types::{hook, BoxedHook, BoxedSink, ErrorHook, Fallback, Fault, Hooks, MessageSink};

use super::{Boundary, Inner};

/// Builder for [`Boundary`].
///
/// Created by [`Boundary::builder`]. The fallback is fixed up front; hooks
/// accumulate in call order.
///
/// # Defaults
///
/// - no hooks
/// - message sink: [`StderrSink`](crate::StderrSink) with `std`,
///   [`DiscardSink`](crate::DiscardSink) otherwise
/// - panics in wrapped functions are intercepted
///
/// # Examples
///
/// ```
/// use error_boundary::{Boundary, Fallback};
///
/// let boundary = Boundary::<String>::builder(Fallback::render(|fault| {
///     eprintln!("An unexpected error occurred. Please contact support.");
///     let _ = fault;
/// }))
/// .on_error(|fault| eprintln!("audit: {fault}"))
/// .on_error(|_| eprintln!("metrics: errors += 1"))
/// .build();
///
/// assert_eq!(boundary.hooks().len(), 2);
/// ```
pub struct BoundaryBuilder<E> {
    hooks: Hooks<E>,
    fallback: Fallback<E>,
    sink: Option<BoxedSink>,
    catch_panics: bool,
}

impl<E> BoundaryBuilder<E> {
    pub(crate) fn new(fallback: Fallback<E>) -> Self {
        Self { hooks: Hooks::none(), fallback, sink: None, catch_panics: true }
    }

    /// Appends a closure hook.
    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&Fault<E>) + Send + Sync + 'static,
    {
        self.hooks.push(hook(f));
        self
    }

    /// Appends a hook value.
    #[must_use]
    pub fn hook<H>(mut self, hook: H) -> Self
    where
        H: ErrorHook<E> + 'static,
    {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Appends hooks in iteration order. The iterator is consumed here.
    #[must_use]
    pub fn hooks<I>(mut self, hooks: I) -> Self
    where
        I: IntoIterator<Item = BoxedHook<E>>,
    {
        self.hooks.extend(hooks);
        self
    }

    /// Sets the collaborator that displays [`Fallback::Message`] text.
    #[must_use]
    pub fn message_sink<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.sink(f)
    }

    /// Sets the message sink from a sink value.
    #[must_use]
    pub fn sink<S>(mut self, sink: S) -> Self
    where
        S: MessageSink + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Sets whether panics in wrapped functions are intercepted.
    ///
    /// With `false`, a panicking wrapped function unwinds through the
    /// boundary untouched. Hook panics are contained either way.
    ///
    /// Interception is not silent: the process panic hook runs before the
    /// boundary catches the unwind, so the default hook still prints
    /// `thread '..' panicked at ..` to stderr for the wrapped function and
    /// for every failing hook. Hosts that want a clean terminal install their
    /// own panic hook. [`Signal::raise`](crate::Signal::raise) does not go
    /// through the panic hook.
    ///
    /// ```
    /// use error_boundary::Boundary;
    ///
    /// std::panic::set_hook(Box::new(|_| {}));
    ///
    /// let boundary = Boundary::<String>::builder("Oops").message_sink(|_| {}).build();
    /// assert!(boundary.catches_panics());
    /// assert_eq!(boundary.call(|| -> Result<(), String> { panic!("quiet") }), Ok(None));
    ///
    /// let _ = std::panic::take_hook();
    /// ```
    #[must_use]
    pub fn catch_panics(mut self, enabled: bool) -> Self {
        self.catch_panics = enabled;
        self
    }

    /// Appends a [`TracingHook`](crate::tracing_ext::TracingHook).
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn trace_faults(self) -> Self
    where
        E: core::fmt::Display + crate::traits::TerminationClass,
    {
        self.hook(crate::tracing_ext::TracingHook::new())
    }

    /// Finishes configuration.
    pub fn build(self) -> Boundary<E> {
        let inner = Inner {
            hooks: self.hooks,
            fallback: self.fallback,
            sink: self.sink.unwrap_or_else(default_sink),
            catch_panics: self.catch_panics,
        };
        Boundary { inner: Arc::new(inner) }
    }
}
