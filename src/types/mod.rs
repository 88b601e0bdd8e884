//! Value types of the boundary.
//!
//! - [`Fault`]: the captured failure handed to hooks and renderers
//! - [`Hooks`] / [`ErrorHook`]: ordered side-effect reactions
//! - [`Fallback`] / [`FallbackRenderer`] / [`MessageSink`]: what the user sees
//! - [`Callback`]: a function with identity metadata
//! - [`Signal`] / [`ErrorClass`]: termination requests and classification
//!
//! # Examples
//!
//! ```
//! use error_boundary::{ErrorHook, Fallback, Fault, Hooks};
//!
//! let hooks: Hooks<&str> = Hooks::one(|fault| eprintln!("audit: {fault}"))
//!     .then(|fault| eprintln!("metrics: {:?}", fault.origin()));
//! let fallback: Fallback<&str> = "Please try again later.".into();
//!
//! for hook in hooks.iter() {
//!     hook.on_error(&Fault::Error("boom"));
//! }
//! assert_eq!(fallback.text(), Some("Please try again later."));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod callback;
pub mod fallback;
pub mod fault;
pub mod hooks;
pub mod signal;

pub use callback::*;
pub use fallback::*;
pub use fault::*;
pub use hooks::*;
pub use signal::*;

/// SmallVec-backed hook storage.
///
/// Uses inline storage for up to 2 hooks, the common "audit + metrics"
/// configuration, before spilling to the heap.
pub type HookVec<E> = SmallVec<[BoxedHook<E>; 2]>;

/// Result of a guarded invocation.
///
/// - `Ok(Some(value))`: the wrapped function succeeded
/// - `Ok(None)`: an ordinary failure was intercepted and the fallback shown
/// - `Err(error)`: a termination-class error passed through unchanged
pub type Outcome<T, E> = Result<Option<T>, E>;
