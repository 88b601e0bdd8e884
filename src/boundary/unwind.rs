//! Panic capture at the boundary.
//!
//! Ordinary panics are turned into a [`PanicMessage`]. A [`Signal`] payload is
//! a termination request and is resumed untouched, so it keeps unwinding
//! past the boundary as if nothing had caught it.
//!
//! The panic hook has already run by the time an ordinary panic is caught
//! here; capture does not suppress its output.

use crate::types::PanicMessage;

#[cfg(feature = "std")]
use crate::types::Signal;

/// Runs `f`, capturing an ordinary panic as its message.
#[cfg(feature = "std")]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> Result<R, PanicMessage> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            if Signal::from_payload(&*payload).is_some() {
                std::panic::resume_unwind(payload);
            }
            Err(PanicMessage::from_payload(&*payload))
        },
    }
}

/// Without `std` unwinding cannot be observed; `f` runs as is.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> Result<R, PanicMessage> {
    Ok(f())
}
