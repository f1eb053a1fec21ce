//! Field dispatch
//!
//! Routes one field value to the rule family for its kind and runs the
//! field's directive against it. Sequences are validated element by
//! element with the same directive; every failing element produces its own
//! error.

use crate::directive::{Directive, Rule};
use crate::foundation::{ErrorKind, FieldKind, FieldValue, Validate, ValidationError};
use crate::validators::{ExactLength, Max, MaxLength, Min, MinLength, OneOf};

/// Runs `directive` against an integer value.
///
/// Integer rules are `in`, `min` and `max`; anything else is
/// [`ErrorKind::UnknownIntRule`].
pub fn evaluate_int(value: i64, directive: &str) -> Result<(), ValidationError> {
    let directive = Directive::parse(directive)?;
    let argument = directive.argument();

    match Rule::from_name(directive.rule()) {
        Some(Rule::In) => OneOf::<i64>::from_argument(argument)?.validate(&value),
        Some(Rule::Min) => Min::<i64>::from_argument(argument)?.validate(&value),
        Some(Rule::Max) => Max::<i64>::from_argument(argument)?.validate(&value),
        Some(Rule::Len) | None => Err(ValidationError::new(ErrorKind::UnknownIntRule)
            .with_param("rule", directive.rule().to_owned())),
    }
}

/// Runs `directive` against a text value.
///
/// Text rules are `len`, `in`, `min` and `max` (the latter two bound the
/// byte length); anything else is [`ErrorKind::UnknownTextRule`].
pub fn evaluate_text(value: &str, directive: &str) -> Result<(), ValidationError> {
    let directive = Directive::parse(directive)?;
    let argument = directive.argument();

    match Rule::from_name(directive.rule()) {
        Some(Rule::Len) => ExactLength::from_argument(argument)?.validate(value),
        Some(Rule::In) => OneOf::<&str>::from_text_argument(argument).validate(&value),
        Some(Rule::Min) => MinLength::from_argument(argument)?.validate(value),
        Some(Rule::Max) => MaxLength::from_argument(argument)?.validate(value),
        None => Err(ValidationError::new(ErrorKind::UnknownTextRule)
            .with_param("rule", directive.rule().to_owned())),
    }
}

/// Validates one field value against its directive.
///
/// Returns every error found, in element order for sequences. An empty
/// sequence is never validated, so even a malformed directive passes.
pub fn validate_field(value: &FieldValue<'_>, directive: &str) -> Vec<ValidationError> {
    match (value.kind(), value) {
        (FieldKind::Integer, FieldValue::Integer(number)) => {
            evaluate_int(*number, directive).err().into_iter().collect()
        }
        (FieldKind::Text, FieldValue::Text(text)) => {
            evaluate_text(text, directive).err().into_iter().collect()
        }
        (FieldKind::IntegerSequence, FieldValue::Sequence(elements)) => {
            each_element(elements, |element| match element {
                FieldValue::Integer(number) => evaluate_int(*number, directive),
                _ => Err(ValidationError::new(ErrorKind::UnsupportedSequenceType)),
            })
        }
        (FieldKind::TextSequence, FieldValue::Sequence(elements)) => {
            each_element(elements, |element| match element {
                FieldValue::Text(text) => evaluate_text(text, directive),
                _ => Err(ValidationError::new(ErrorKind::UnsupportedSequenceType)),
            })
        }
        (FieldKind::EmptySequence, _) => Vec::new(),
        (FieldKind::Unsupported { sequence: true }, _) => {
            vec![ValidationError::new(ErrorKind::UnsupportedSequenceType)]
        }
        _ => vec![ValidationError::new(ErrorKind::UnsupportedType)],
    }
}

fn each_element<'v, F>(elements: &[FieldValue<'v>], mut check: F) -> Vec<ValidationError>
where
    F: FnMut(&FieldValue<'v>) -> Result<(), ValidationError>,
{
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| check(element).err().map(|e| e.with_index(index)))
        .collect()
}
