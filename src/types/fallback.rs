//! Fallback rendering: what the end user sees instead of a crash.

use core::fmt::{Debug, Formatter};

use crate::types::alloc_type::{Box, Cow, String};
use crate::types::Fault;

/// Custom fallback UI for an intercepted [`Fault`].
///
/// The renderer owns the whole fallback presentation: an error banner, a
/// "contact support" link, a retry button. It may show fault details or
/// deliberately hide them.
///
/// Unlike hooks, a renderer is not isolated: if it panics, the panic leaves
/// the wrapped call.
pub trait FallbackRenderer<E>: Send + Sync {
    /// Renders the fallback for the fault.
    fn render(&self, fault: &Fault<E>);
}

impl<E, F> FallbackRenderer<E> for F
where
    F: Fn(&Fault<E>) + Send + Sync,
{
    #[inline]
    fn render(&self, fault: &Fault<E>) {
        self(fault)
    }
}

/// The host collaborator that displays a plain fallback message as an error.
///
/// A [`Fallback::Message`] is handed to the sink verbatim: no templating,
/// interpolation or truncation.
pub trait MessageSink: Send + Sync {
    /// Shows `message` to the user as an error.
    fn show_error(&self, message: &str);
}

impl<F> MessageSink for F
where
    F: Fn(&str) + Send + Sync,
{
    #[inline]
    fn show_error(&self, message: &str) {
        self(message)
    }
}

/// Boxed, type-erased [`MessageSink`].
pub type BoxedSink = Box<dyn MessageSink>;

/// Writes fallback messages to standard error.
///
/// The default sink when the `std` feature is enabled.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl MessageSink for StderrSink {
    fn show_error(&self, message: &str) {
        std::eprintln!("{message}");
    }
}

/// Drops fallback messages.
///
/// The default sink without `std`, where there is nowhere to write to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl MessageSink for DiscardSink {
    #[inline]
    fn show_error(&self, _message: &str) {}
}

/// Returns the sink used when none is configured.
pub(crate) fn default_sink() -> BoxedSink {
    #[cfg(feature = "std")]
    {
        Box::new(StderrSink)
    }
    #[cfg(not(feature = "std"))]
    {
        Box::new(DiscardSink)
    }
}

/// What a [`Boundary`](crate::Boundary) shows after an intercepted fault.
///
/// # Examples
///
/// ```
/// use error_boundary::Fallback;
///
/// let plain: Fallback<&str> = "Something went wrong. Please try again.".into();
/// assert_eq!(plain.text(), Some("Something went wrong. Please try again."));
///
/// let custom: Fallback<&str> = Fallback::render(|fault| eprintln!("custom UI for {fault}"));
/// assert!(custom.is_renderer());
/// ```
pub enum Fallback<E> {
    /// Static text, shown through the boundary's [`MessageSink`].
    Message(Cow<'static, str>),
    /// Custom rendering, fully delegated to the renderer.
    Render(Box<dyn FallbackRenderer<E>>),
}

impl<E> Fallback<E> {
    /// A static fallback message.
    #[inline]
    pub fn message(text: impl Into<Cow<'static, str>>) -> Self {
        Fallback::Message(text.into())
    }

    /// A closure renderer.
    #[inline]
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(&Fault<E>) + Send + Sync + 'static,
    {
        Fallback::Render(Box::new(f))
    }

    /// A renderer value.
    #[inline]
    pub fn renderer<R>(renderer: R) -> Self
    where
        R: FallbackRenderer<E> + 'static,
    {
        Fallback::Render(Box::new(renderer))
    }

    /// Returns the message text for [`Fallback::Message`].
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Fallback::Message(text) => Some(&**text),
            Fallback::Render(_) => None,
        }
    }

    /// Returns `true` for [`Fallback::Render`].
    #[inline]
    pub fn is_renderer(&self) -> bool {
        matches!(self, Fallback::Render(_))
    }

    /// Shows the fallback for `fault`.
    pub(crate) fn show(&self, fault: &Fault<E>, sink: &dyn MessageSink) {
        match self {
            Fallback::Message(text) => sink.show_error(text),
            Fallback::Render(renderer) => renderer.render(fault),
        }
    }
}

impl<E> Debug for Fallback<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Fallback::Message(text) => f.debug_tuple("Message").field(text).finish(),
            Fallback::Render(_) => f.write_str("Render(..)"),
        }
    }
}

impl<E> From<&'static str> for Fallback<E> {
    fn from(text: &'static str) -> Self {
        Fallback::Message(Cow::Borrowed(text))
    }
}

impl<E> From<String> for Fallback<E> {
    fn from(text: String) -> Self {
        Fallback::Message(Cow::Owned(text))
    }
}

impl<E> From<Cow<'static, str>> for Fallback<E> {
    fn from(text: Cow<'static, str>) -> Self {
        Fallback::Message(text)
    }
}
