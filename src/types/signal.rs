//! Termination signals and error classes.

use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interception class of a failure.
///
/// See [`TerminationClass`](crate::traits::TerminationClass).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// A fault in application logic. Intercepted by a boundary.
    Ordinary,
    /// A request to stop execution. Never intercepted.
    Termination,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorClass::Ordinary => f.write_str("ordinary"),
            ErrorClass::Termination => f.write_str("termination"),
        }
    }
}

/// A request to stop execution.
///
/// `Signal` is the termination-class condition of this crate. It can travel
/// two ways and a [`Boundary`](crate::Boundary) lets it through on both:
///
/// - as an `Err` value of a wrapped function (it implements
///   [`TerminationClass`](crate::traits::TerminationClass) and always reports
///   a termination), or
/// - as an unwinding payload raised with [`Signal::raise`] from arbitrarily
///   deep inside a callback, a hook or a renderer.
///
/// # Examples
///
/// ```
/// use error_boundary::{Boundary, Signal};
///
/// let boundary = Boundary::<Signal>::builder("Something went wrong").build();
///
/// let outcome = boundary.call(|| Err::<(), _>(Signal::Exit(2)));
/// assert_eq!(outcome, Err(Signal::Exit(2)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// User-initiated interrupt (Ctrl-C, a "stop" button of the host).
    Interrupt,
    /// Explicit process exit request with the requested exit code.
    Exit(i32),
    /// Teardown of the host's callback or iteration machinery.
    Teardown,
}

impl Signal {
    /// Returns the requested exit code for [`Signal::Exit`].
    #[inline]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Signal::Exit(code) => Some(*code),
            _ => None,
        }
    }

    /// Unwinds the current thread with this signal as payload.
    ///
    /// Uses [`std::panic::resume_unwind`], so the panic hook does not run and
    /// nothing is printed. Boundaries re-raise the payload untouched; catch it
    /// at the top of the host with [`Signal::from_payload`].
    ///
    /// ```
    /// use error_boundary::Signal;
    ///
    /// let caught = std::panic::catch_unwind(|| Signal::Interrupt.raise()).unwrap_err();
    /// assert_eq!(Signal::from_payload(caught.as_ref()), Some(Signal::Interrupt));
    /// ```
    #[cfg(feature = "std")]
    pub fn raise(self) -> ! {
        std::panic::resume_unwind(std::boxed::Box::new(self))
    }

    /// Extracts a signal from an unwinding payload, if it carries one.
    #[cfg(feature = "std")]
    #[inline]
    pub fn from_payload(payload: &(dyn core::any::Any + Send)) -> Option<Signal> {
        payload.downcast_ref::<Signal>().copied()
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Signal::Interrupt => f.write_str("interrupted"),
            Signal::Exit(code) => write!(f, "exit requested (code {code})"),
            Signal::Teardown => f.write_str("teardown"),
        }
    }
}

impl core::error::Error for Signal {}
