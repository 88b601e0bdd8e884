use crate::traits::TerminationClass;
use crate::types::Outcome;
use crate::Boundary;

/// Extension methods for passing an existing `Result` through a boundary.
///
/// Useful where the failing step is not a closure, e.g. the result of an
/// `?`-heavy helper that the caller wants to contain at the UI edge.
///
/// # Examples
///
/// ```
/// use error_boundary::{Boundary, ResultBoundaryExt};
///
/// fn load_profile(id: u32) -> Result<String, String> {
///     Err(format!("profile {id} missing"))
/// }
///
/// let boundary = Boundary::<String>::builder("Profile unavailable.").message_sink(|_| {}).build();
///
/// assert_eq!(load_profile(7).within(&boundary), Ok(None));
/// ```
pub trait ResultBoundaryExt<T, E> {
    /// Resolves the result under `boundary`.
    ///
    /// Equivalent to [`Boundary::resolve`].
    fn within(self, boundary: &Boundary<E>) -> Outcome<T, E>;
}

impl<T, E: TerminationClass> ResultBoundaryExt<T, E> for Result<T, E> {
    #[inline]
    fn within(self, boundary: &Boundary<E>) -> Outcome<T, E> {
        boundary.resolve(self)
    }
}
