//! Callbacks with identity metadata.
//!
//! Rust functions carry no runtime name or documentation, so a callback that
//! is handed to a host runtime (an on-click slot, an event table) carries
//! them explicitly in [`CallbackMeta`]. Wrapping a callback with
//! [`Boundary::wrap_callback`](crate::Boundary::wrap_callback) copies the
//! metadata onto the wrapper, so debugging tools see the original identity.

use core::fmt::{Debug, Formatter};

use crate::types::alloc_type::Cow;

/// Name and documentation of a callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallbackMeta {
    name: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
}

impl CallbackMeta {
    /// Metadata with a name and no documentation.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), doc: None }
    }

    /// Attaches documentation.
    #[inline]
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The callback's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The callback's documentation, if any.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// A function together with its [`CallbackMeta`].
///
/// # Examples
///
/// ```
/// use error_boundary::Callback;
///
/// fn refresh_dashboard() -> Result<u32, String> {
///     Ok(3)
/// }
///
/// let named = Callback::new("refresh", refresh_dashboard).with_doc("Reloads all widgets.");
/// assert_eq!(named.name(), "refresh");
/// assert_eq!(named.call(), Ok(3));
///
/// let derived = Callback::from_fn(refresh_dashboard);
/// assert_eq!(derived.name(), "refresh_dashboard");
/// ```
#[derive(Clone)]
pub struct Callback<F> {
    meta: CallbackMeta,
    func: F,
}

impl<F> Callback<F> {
    /// A callback with an explicit name.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, func: F) -> Self {
        Self { meta: CallbackMeta::new(name), func }
    }

    /// A callback named after the function item's path.
    ///
    /// For a function item the name is its final path segment
    /// (`refresh_dashboard`). Closures have no name of their own and are
    /// named after the enclosing function. Associated functions keep only
    /// their own name: `Vec::<u8>::new` is `new`. Names derive from
    /// [`core::any::type_name`], whose exact output is not guaranteed; use
    /// [`Callback::new`] when the name matters.
    #[inline]
    pub fn from_fn(func: F) -> Self {
        Self::new(short_type_name::<F>(), func)
    }

    /// A callback with prepared metadata.
    #[inline]
    pub fn with_meta(meta: CallbackMeta, func: F) -> Self {
        Self { meta, func }
    }

    /// Attaches documentation.
    #[inline]
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.meta = self.meta.with_doc(doc);
        self
    }

    /// The callback's name.
    #[inline]
    pub fn name(&self) -> &str {
        self.meta.name()
    }

    /// The callback's documentation, if any.
    #[inline]
    pub fn doc(&self) -> Option<&str> {
        self.meta.doc()
    }

    /// The callback's metadata.
    #[inline]
    pub fn meta(&self) -> &CallbackMeta {
        &self.meta
    }

    /// The underlying function.
    #[inline]
    pub fn func(&self) -> &F {
        &self.func
    }

    /// Invokes a zero-argument callback.
    #[inline]
    pub fn call<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        (self.func)()
    }

    /// Invokes a one-argument callback.
    #[inline]
    pub fn call_with<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        (self.func)(arg)
    }

    /// Discards the metadata, returning the bare function for registration
    /// with a host slot.
    #[inline]
    pub fn into_fn(self) -> F {
        self.func
    }

    /// Splits into metadata and function.
    #[inline]
    pub fn into_parts(self) -> (CallbackMeta, F) {
        (self.meta, self.func)
    }

    /// Replaces the function, keeping the metadata.
    #[inline]
    pub fn map<G>(self, f: impl FnOnce(F) -> G) -> Callback<G> {
        Callback { meta: self.meta, func: f(self.func) }
    }
}

impl<F> Debug for Callback<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.meta.name())
            .field("doc", &self.meta.doc())
            .finish_non_exhaustive()
    }
}

/// Final path segment of `F`'s type name, closures attributed to their
/// enclosing item.
///
/// Segments are split on `::` outside angle brackets, so generic arguments
/// (`Vec<u8>::new`) and qualified paths (`<T as Trait>::method`) never leak
/// into the name.
fn short_type_name<F>() -> &'static str {
    let full = core::any::type_name::<F>();
    let bytes = full.as_bytes();
    let mut name = None;
    let mut keep = |segment: &'static str| {
        let bare = segment.split('<').next().unwrap_or(segment);
        if !bare.is_empty() && !bare.starts_with('{') {
            name = Some(bare);
        }
    };

    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                keep(&full[start..i]);
                start = i + 2;
                i += 1;
            },
            _ => {},
        }
        i += 1;
    }
    keep(&full[start..]);

    name.unwrap_or(full)
}
