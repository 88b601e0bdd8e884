//! The captured failure handed to hooks and fallback renderers.

use core::fmt::{Debug, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::traits::TerminationClass;
use crate::types::alloc_type::{Cow, String};
use crate::types::ErrorClass;

/// Message extracted from a caught panic payload.
///
/// Only `&'static str` and `String` payloads (what `panic!` produces) carry a
/// readable message. Anything else is reported as
/// [`PanicMessage::OPAQUE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicMessage(Cow<'static, str>);

impl PanicMessage {
    /// Placeholder for payloads that are neither `&str` nor `String`.
    pub const OPAQUE: &'static str = "Box<dyn Any>";

    /// Creates a panic message from text.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Returns the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes an unwinding payload.
    #[cfg(feature = "std")]
    pub fn from_payload(payload: &(dyn core::any::Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self(Cow::Borrowed(*message))
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self(Cow::Owned(message.clone()))
        } else {
            Self(Cow::Borrowed(Self::OPAQUE))
        }
    }
}

impl Display for PanicMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a [`Fault`] came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultOrigin {
    /// The wrapped function returned an ordinary `Err`.
    Error,
    /// The wrapped function panicked.
    Panic,
}

/// An intercepted failure of a wrapped function.
///
/// A `Fault` exists only for the duration of one failed invocation. Hooks and
/// the fallback renderer receive it by shared reference, one after another;
/// the boundary never stores it.
///
/// # Examples
///
/// ```
/// use error_boundary::{Fault, FaultOrigin};
///
/// let fault: Fault<&str> = Fault::Error("disk full");
/// assert_eq!(fault.origin(), FaultOrigin::Error);
/// assert_eq!(fault.error(), Some(&"disk full"));
/// assert_eq!(fault.to_string(), "disk full");
/// ```
pub enum Fault<E> {
    /// An ordinary error returned by the wrapped function.
    Error(E),
    /// A panic caught while running the wrapped function.
    Panic(PanicMessage),
}

impl<E> Fault<E> {
    /// Returns where this fault came from.
    #[inline]
    pub const fn origin(&self) -> FaultOrigin {
        match self {
            Fault::Error(_) => FaultOrigin::Error,
            Fault::Panic(_) => FaultOrigin::Panic,
        }
    }

    /// Returns the error value when the fault is an ordinary `Err`.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Fault::Error(error) => Some(error),
            Fault::Panic(_) => None,
        }
    }

    /// Returns the panic message when the fault is a caught panic.
    #[inline]
    pub const fn panic_message(&self) -> Option<&PanicMessage> {
        match self {
            Fault::Error(_) => None,
            Fault::Panic(message) => Some(message),
        }
    }

    /// Returns `true` if the fault is a caught panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Fault::Panic(_))
    }

    /// Consumes the fault and returns the error value, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Fault::Error(error) => Some(error),
            Fault::Panic(_) => None,
        }
    }

    /// Returns the interception class of the fault.
    ///
    /// Faults reach hooks only after classification, so this is
    /// [`ErrorClass::Ordinary`] for anything produced by a boundary.
    pub fn class(&self) -> ErrorClass
    where
        E: TerminationClass,
    {
        match self {
            Fault::Error(error) => error.class(),
            Fault::Panic(_) => ErrorClass::Ordinary,
        }
    }

    /// Takes a serializable snapshot of the fault for audit trails.
    pub fn report(&self) -> FaultReport
    where
        E: Display + TerminationClass,
    {
        FaultReport { origin: self.origin(), class: self.class(), message: self.to_string() }
    }
}

impl<E: Display> Display for Fault<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::Error(error) => Display::fmt(error, f),
            Fault::Panic(message) => write!(f, "panicked: {message}"),
        }
    }
}

impl<E: Debug> Debug for Fault<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Fault::Panic(message) => f.debug_tuple("Panic").field(&message.as_str()).finish(),
        }
    }
}

/// Serializable snapshot of a [`Fault`].
///
/// # Examples
///
/// ```
/// use error_boundary::{ErrorClass, Fault, FaultOrigin, PanicMessage};
///
/// let fault: Fault<String> = Fault::Panic(PanicMessage::new("index out of bounds"));
/// let report = fault.report();
///
/// assert_eq!(report.origin, FaultOrigin::Panic);
/// assert_eq!(report.class, ErrorClass::Ordinary);
/// assert_eq!(report.message, "panicked: index out of bounds");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReport {
    /// Where the fault came from.
    pub origin: FaultOrigin,
    /// Interception class at the time of capture.
    pub class: ErrorClass,
    /// Display rendering of the fault.
    pub message: String,
}
