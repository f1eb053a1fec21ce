//! Membership validator (`in:a,b,c`)

use crate::foundation::{ErrorKind, Validate, ValidationError};
use crate::validators::args::{parse_int_list, split_list};

/// Passes when the input equals one of the listed items.
///
/// Works for any `PartialEq` item type; the directive layer instantiates
/// it with `i64` for integer fields and `&str` for text fields.
///
/// # Examples
///
/// ```rust
/// use fieldtag::foundation::Validate;
/// use fieldtag::validators::one_of;
///
/// let roles = one_of(["admin", "user"]);
/// assert!(roles.validate(&"admin").is_ok());
/// assert!(roles.validate(&"guest").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<T> {
    /// Accepted values, in the order they were listed.
    pub items: Vec<T>,
}

impl<T: PartialEq> OneOf<T> {
    /// Creates the validator from a list of accepted values.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns true if `value` is one of the accepted values.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|item| item == value)
    }
}

impl<T: PartialEq> Validate for OneOf<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::new(ErrorKind::In)
                .with_param("options", self.items.len().to_string()))
        }
    }
}

impl OneOf<i64> {
    /// Builds the rule from an `in` argument on an integer field.
    ///
    /// Every item must parse as an integer.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_int_list(argument).map(Self::new)
    }
}

impl<'a> OneOf<&'a str> {
    /// Builds the rule from an `in` argument on a text field. Never fails.
    #[must_use]
    pub fn from_text_argument(argument: &'a str) -> Self {
        Self::new(split_list(argument).collect())
    }
}

/// Creates a [`OneOf`] validator.
#[must_use]
pub fn one_of<T: PartialEq>(items: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(items.into_iter().collect())
}
