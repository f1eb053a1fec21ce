//! Record walking
//!
//! [`validate`] is the entry point of the crate. It checks that it was given
//! a record, then visits every field in declaration order:
//!
//! 1. no directive: the field is skipped;
//! 2. directive on a non-public field: an
//!    [`ErrorKind::UnexportedField`] error is recorded and the value is not read;
//! 3. otherwise the value is read and handed to [`validate_field`].
//!
//! Every field is visited even after failures; all errors are returned
//! together.

use tracing::{debug, trace};

use crate::dispatch::validate_field;
use crate::foundation::{
    ErrorKind, Inspect, Record, Shape, ValidateError, ValidationError, ValidationErrors,
};

/// Validates every field of `value` that carries a directive.
///
/// # Errors
///
/// - [`ValidateError::NotStruct`] when `value` is not a record. Nothing is
///   validated in that case.
/// - [`ValidateError::Invalid`] with the full report when any field failed.
///
/// # Examples
///
/// ```rust
/// use fieldtag::{ErrorKind, Record, validate};
///
/// #[derive(Record)]
/// struct Person {
///     #[validate("min:0")]
///     pub age: i32,
///     #[validate("len:3")]
///     pub name: String,
/// }
///
/// let person = Person { age: -1, name: "bob".into() };
/// let report = validate(&person).unwrap_err().into_errors().unwrap();
///
/// assert_eq!(report.kinds(), vec![ErrorKind::Min]);
/// assert!(validate(&42).unwrap_err().is_not_struct());
/// ```
pub fn validate<T: Inspect + ?Sized>(value: &T) -> Result<(), ValidateError> {
    match value.shape() {
        Shape::Record(record) => validate_record(record).map_err(ValidateError::from),
        Shape::Value(kind) => {
            debug!(%kind, "refusing to validate a non-record value");
            Err(ValidateError::NotStruct { kind })
        }
    }
}

/// Walks the fields of a record and collects every failure.
///
/// This is [`validate`] without the shape check, for callers that already
/// hold a [`Record`].
pub fn validate_record<R: Record + ?Sized>(record: &R) -> Result<(), ValidationErrors> {
    let type_name = record.type_name();
    let mut errors = ValidationErrors::new();

    for (index, field) in record.fields().iter().enumerate() {
        let Some(directive) = field.directive else {
            continue;
        };

        if !field.is_visible() {
            trace!(
                record = type_name,
                field = field.name,
                visibility = ?field.visibility,
                "directive on non-public field"
            );
            errors.add(ValidationError::new(ErrorKind::UnexportedField).with_field(field.name));
            continue;
        }

        let Some(value) = record.field_value(index) else {
            trace!(record = type_name, field = field.name, "field has no accessor");
            errors.add(ValidationError::new(ErrorKind::UnsupportedType).with_field(field.name));
            continue;
        };

        let failures = validate_field(&value, directive);
        trace!(
            record = type_name,
            field = field.name,
            directive,
            kind = ?value.kind(),
            failures = failures.len(),
            "validated field"
        );
        errors.extend(failures.into_iter().map(|e| e.with_field(field.name)));
    }

    debug!(record = type_name, errors = errors.len(), "record validated");
    errors.into_result()
}
