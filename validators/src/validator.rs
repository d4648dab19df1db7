use crate::outcome::ValidationOutcome;
use std::fmt::Display;

/// Core validation trait that all validators must implement.
///
/// This trait provides a consistent interface for validating data across
/// input widgets. Validators are constructed once with their configuration
/// and can then be invoked any number of times; a call never mutates the
/// validator.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use validators::Validator;
///
/// struct NotEmpty;
/// impl Validator<str> for NotEmpty {
///     type Error = String;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.is_empty() {
///             Err("Input cannot be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotEmpty.outcome("").is_invalid());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;

    /// Validate the input and fold the result into a [`ValidationOutcome`]
    /// carrying the error's display text as the reason.
    fn outcome(&self, input: &T) -> ValidationOutcome
    where
        Self::Error: Display,
    {
        ValidationOutcome::from_result(self.validate(input))
    }
}
