//! Error hooks and their ordered collection.

use core::fmt::{Debug, Formatter};

use crate::types::alloc_type::{Box, Vec};
use crate::types::{Fault, HookVec};

/// A side-effect-only reaction to an intercepted [`Fault`].
///
/// Hooks are where audit logging, notifications and metrics live. They run
/// in the order they were configured, each receiving the same fault.
///
/// Any `Fn(&Fault<E>) + Send + Sync` closure is a hook; implement the trait
/// directly for hooks that carry configuration.
///
/// # Failure isolation
///
/// A hook that panics is contained: the panic is swallowed and the next
/// hook runs. A hook that raises a [`Signal`](crate::Signal) stops dispatch
/// and the signal propagates.
///
/// # Examples
///
/// ```
/// use error_boundary::{ErrorHook, Fault};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct CountingHook(AtomicUsize);
///
/// impl<E> ErrorHook<E> for CountingHook {
///     fn on_error(&self, _fault: &Fault<E>) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let hook = CountingHook(AtomicUsize::new(0));
/// ErrorHook::<&str>::on_error(&hook, &Fault::Error("boom"));
/// assert_eq!(hook.0.load(Ordering::Relaxed), 1);
/// ```
pub trait ErrorHook<E>: Send + Sync {
    /// Reacts to the fault.
    fn on_error(&self, fault: &Fault<E>);
}

impl<E, F> ErrorHook<E> for F
where
    F: Fn(&Fault<E>) + Send + Sync,
{
    #[inline]
    fn on_error(&self, fault: &Fault<E>) {
        self(fault)
    }
}

/// Boxed, type-erased [`ErrorHook`].
pub type BoxedHook<E> = Box<dyn ErrorHook<E>>;

/// Boxes a closure as a hook.
///
/// Pins the closure's argument type so `|fault| ...` needs no annotation
/// when building a hook collection.
///
/// ```
/// use error_boundary::{hook, Hooks};
///
/// let hooks: Hooks<&str> = [hook(|_| {}), hook(|fault| drop(fault.error()))].into();
/// assert_eq!(hooks.len(), 2);
/// ```
#[inline]
pub fn hook<E, F>(f: F) -> BoxedHook<E>
where
    F: Fn(&Fault<E>) + Send + Sync + 'static,
{
    Box::new(f)
}

/// Ordered, owned sequence of error hooks.
///
/// Whatever the caller hands over (a single hook, a `Vec`, an array or an
/// iterator) is materialized here once; the resulting order is the execution
/// order for the lifetime of the [`Boundary`](crate::Boundary).
pub struct Hooks<E> {
    hooks: HookVec<E>,
}

impl<E> Hooks<E> {
    /// No hooks. A boundary built with it only renders the fallback.
    #[inline]
    pub fn none() -> Self {
        Self { hooks: HookVec::new() }
    }

    /// A single closure hook.
    #[inline]
    pub fn one<F>(f: F) -> Self
    where
        F: Fn(&Fault<E>) + Send + Sync + 'static,
    {
        Self::from(hook(f))
    }

    /// A single hook value.
    #[inline]
    pub fn from_hook<H>(hook: H) -> Self
    where
        H: ErrorHook<E> + 'static,
    {
        Self::from(Box::new(hook) as BoxedHook<E>)
    }

    /// Appends a closure hook, returning the extended sequence.
    #[inline]
    pub fn then<F>(mut self, f: F) -> Self
    where
        F: Fn(&Fault<E>) + Send + Sync + 'static,
    {
        self.hooks.push(hook(f));
        self
    }

    /// Number of hooks.
    #[inline]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if there are no hooks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Iterates hooks in execution order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(dyn ErrorHook<E> + 'static)> {
        self.hooks.iter().map(|hook| hook.as_ref())
    }

    pub(crate) fn push(&mut self, hook: BoxedHook<E>) {
        self.hooks.push(hook);
    }
}

impl<E> Default for Hooks<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> Debug for Hooks<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hooks").field("len", &self.hooks.len()).finish()
    }
}

impl<E> From<BoxedHook<E>> for Hooks<E> {
    fn from(hook: BoxedHook<E>) -> Self {
        let mut hooks = HookVec::new();
        hooks.push(hook);
        Self { hooks }
    }
}

impl<E> From<Vec<BoxedHook<E>>> for Hooks<E> {
    fn from(hooks: Vec<BoxedHook<E>>) -> Self {
        Self { hooks: HookVec::from_vec(hooks) }
    }
}

impl<E, const N: usize> From<[BoxedHook<E>; N]> for Hooks<E> {
    fn from(hooks: [BoxedHook<E>; N]) -> Self {
        hooks.into_iter().collect()
    }
}

impl<E> FromIterator<BoxedHook<E>> for Hooks<E> {
    fn from_iter<I: IntoIterator<Item = BoxedHook<E>>>(iter: I) -> Self {
        Self { hooks: iter.into_iter().collect() }
    }
}

impl<E> Extend<BoxedHook<E>> for Hooks<E> {
    fn extend<I: IntoIterator<Item = BoxedHook<E>>>(&mut self, iter: I) {
        self.hooks.extend(iter);
    }
}

impl<E> IntoIterator for Hooks<E> {
    type Item = BoxedHook<E>;
    type IntoIter = smallvec::IntoIter<[BoxedHook<E>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.hooks.into_iter()
    }
}
