//! Macros for callback metadata and error classification.
//!
//! - [`macro@crate::callback`] - Builds a [`Callback`](crate::Callback) named after
//!   the function identifier, optionally with documentation.
//! - [`macro@crate::impl_termination_class`] - Implements
//!   [`TerminationClass`](crate::traits::TerminationClass) for a type, either as
//!   "always ordinary" or with a pattern selecting the termination variants.
//!
//! # Examples
//!
//! ```
//! use error_boundary::{callback, impl_termination_class, Boundary};
//!
//! #[derive(Debug)]
//! enum UiError {
//!     Widget(String),
//!     Closed,
//! }
//!
//! impl_termination_class!(UiError => UiError::Closed);
//!
//! fn on_click() -> Result<(), UiError> {
//!     Err(UiError::Widget("button".into()))
//! }
//!
//! let boundary = Boundary::<UiError>::builder("Oops").message_sink(|_| {}).build();
//! let handler = boundary.wrap_callback(callback!(on_click));
//!
//! assert_eq!(handler.name(), "on_click");
//! assert!(matches!(handler.call(), Ok(None)));
//! ```

/// Builds a [`Callback`](crate::Callback) named after a function identifier.
///
/// # Syntax
///
/// - `callback!(func)` - name only
/// - `callback!(func, "doc")` - name and documentation
///
/// # Examples
///
/// ```
/// use error_boundary::callback;
///
/// fn trigger_error() -> Result<(), String> {
///     Err("division by zero".into())
/// }
///
/// let cb = callback!(trigger_error, "Callback that raises an error.");
/// assert_eq!(cb.name(), "trigger_error");
/// assert_eq!(cb.doc(), Some("Callback that raises an error."));
/// ```
#[macro_export]
macro_rules! callback {
    ($func:ident $(,)?) => {
        $crate::Callback::new(stringify!($func), $func)
    };
    ($func:ident, $doc:expr $(,)?) => {
        $crate::Callback::new(stringify!($func), $func).with_doc($doc)
    };
}

/// Implements [`TerminationClass`](crate::traits::TerminationClass) for a type.
///
/// # Syntax
///
/// - `impl_termination_class!(Type)` - every value is an ordinary error
/// - `impl_termination_class!(Type => pattern)` - values matching `pattern`
///   are termination conditions
///
/// # Examples
///
/// ```
/// use error_boundary::{impl_termination_class, traits::TerminationClass};
///
/// #[derive(Debug)]
/// struct ParseError;
///
/// #[derive(Debug)]
/// enum JobError {
///     Failed(u8),
///     Cancelled,
///     ShuttingDown,
/// }
///
/// impl_termination_class!(ParseError);
/// impl_termination_class!(JobError => JobError::Cancelled | JobError::ShuttingDown);
///
/// assert!(ParseError.is_ordinary());
/// assert!(JobError::Failed(1).is_ordinary());
/// assert!(JobError::ShuttingDown.is_termination());
/// ```
#[macro_export]
macro_rules! impl_termination_class {
    ($type:ty => $($pattern:pat_param)|+) => {
        impl $crate::traits::TerminationClass for $type {
            #[inline]
            fn is_termination(&self) -> bool {
                matches!(self, $($pattern)|+)
            }
        }
    };
    ($type:ty) => {
        impl $crate::traits::TerminationClass for $type {
            #[inline]
            fn is_termination(&self) -> bool {
                false
            }
        }
    };
}
