//! Outcome conversion for handler return values.

use crate::error::BoxError;

/// Trait for converting a handler's return value into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to `T`, or fails with `E` boxed
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a handler outcome",
    label = "missing `IntoOutcome` implementation",
    note = "Handlers should return `()` or `Result<(), E>`."
)]
pub trait IntoOutcome {
    /// Convert the value into success or a boxed failure.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}
