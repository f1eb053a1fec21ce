//! Core traits for the rule evaluators
//!
//! Every rule (`len`, `in`, `min`, `max`) is a small struct implementing
//! [`Validate`] for the input it understands.

use crate::foundation::ValidationError;

/// The trait every rule evaluator implements.
///
/// Generic over the input type so a rule can only be applied to the kind of
/// value it was written for. Returns `Ok(())` on success or the rule's
/// [`ValidationError`] on failure.
///
/// # Examples
///
/// ```rust
/// use fieldtag::foundation::{ErrorKind, Validate, ValidationError};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input >= 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new(ErrorKind::Min))
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&3).is_ok());
/// assert!(NonNegative.validate(&-3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
