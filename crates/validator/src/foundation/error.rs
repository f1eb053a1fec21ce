//! Error types for validation failures
//!
//! Two tiers live here:
//!
//! - [`ValidateError`] is what [`validate`](crate::validate) returns. It is
//!   either a structural failure that aborted the call ([`ValidateError::NotStruct`])
//!   or the accumulated per-field report ([`ValidateError::Invalid`]).
//! - [`ValidationError`] is one per-field failure, tagged with an [`ErrorKind`].
//!   [`ValidationErrors`] collects them in the order they were produced.
//!
//! Error identity is carried by [`ErrorKind`]; the rendered text of a report
//! is the concatenation of the individual messages with no separator.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::inspect::ValueKind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Tag identifying what produced a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed directive: separator count, empty argument, or an argument
    /// that does not parse as a number.
    InvalidSyntax,
    /// A directive is attached to a field that is not publicly visible.
    UnexportedField,
    /// Rule name not in the integer rule family.
    UnknownIntRule,
    /// Rule name not in the text rule family.
    UnknownTextRule,
    /// The field kind is not integer, text or a sequence.
    UnsupportedType,
    /// A non-empty sequence whose elements are neither integers nor text.
    UnsupportedSequenceType,
    /// `len` rule failed.
    Len,
    /// `in` rule failed.
    In,
    /// `min` rule failed.
    Min,
    /// `max` rule failed.
    Max,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidSyntax => "invalid_syntax",
            Self::UnexportedField => "unexported_field",
            Self::UnknownIntRule => "unknown_int_rule",
            Self::UnknownTextRule => "unknown_text_rule",
            Self::UnsupportedType => "unsupported_type",
            Self::UnsupportedSequenceType => "unsupported_sequence_type",
            Self::Len => "len",
            Self::In => "in",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Human-readable message. These strings are part of the rendering
    /// contract of [`ValidationErrors`] and must not change.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidSyntax => "invalid validator syntax",
            Self::UnexportedField => "validation for unexported field is not allowed",
            Self::UnknownIntRule => "unknown int validator",
            Self::UnknownTextRule => "unknown string validator",
            Self::UnsupportedType => "unsupported type",
            Self::UnsupportedSequenceType => "unsupported slice type",
            Self::Len => "failed 'len' validator",
            Self::In => "failed 'in' validator",
            Self::Min => "failed 'min' validator",
            Self::Max => "failed 'max' validator",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single per-field validation failure.
///
/// Rule evaluators create errors without a field; the record walker attaches
/// the field name, and the dispatcher attaches the element index for
/// sequence fields.
///
/// # Examples
///
/// ```rust
/// use fieldtag::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::Min)
///     .with_field("age")
///     .with_param("min", "0");
///
/// assert_eq!(error.to_string(), "failed 'min' validator");
/// assert_eq!(error.param("min"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// What failed.
    pub kind: ErrorKind,

    /// Name of the record field the error belongs to.
    pub field: Option<Cow<'static, str>>,

    /// Element position when the field is a sequence.
    pub index: Option<usize>,

    /// Extra context such as the rule argument or the offending value.
    ///
    /// Stored as ordered key-value pairs (typically 0-2 params).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates an error of the given kind with no context attached.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            index: None,
            params: SmallVec::new(),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidSyntax`] error.
    pub fn invalid_syntax(directive: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidSyntax).with_param("directive", directive)
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the element position for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The human-readable message of this error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.kind.code(),
            "message": self.kind.message(),
            "field": self.field,
            "index": self.index,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

impl std::error::Error for ValidationError {}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered report of every failure found in one validation pass.
///
/// Purely additive: errors keep the order they were added in, nothing is
/// deduplicated, sorted or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors attached to the named field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Returns the error kinds in insertion order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Converts the report to a JSON array.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.errors.iter().map(ValidationError::to_json_value).collect())
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// Messages are concatenated with no separator. Callers relying on the
// rendered form depend on this exact output.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Failure returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    /// The value passed in is not a record. Nothing was validated.
    #[error("wrong argument given, should be a struct")]
    NotStruct {
        /// What was passed instead.
        kind: ValueKind,
    },

    /// The record was walked and at least one field failed.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ValidateError {
    /// Returns the per-field report, if this is not a structural failure.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotStruct { .. } => None,
        }
    }

    /// Consumes the error, returning the per-field report if there is one.
    #[must_use]
    pub fn into_errors(self) -> Option<ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotStruct { .. } => None,
        }
    }

    /// Returns true for [`ValidateError::NotStruct`].
    #[must_use]
    pub fn is_not_struct(&self) -> bool {
        matches!(self, Self::NotStruct { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
