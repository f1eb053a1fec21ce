//! Rule argument parsing
//!
//! Rule arguments arrive as raw directive text. Anything that does not
//! parse is an [`ErrorKind::InvalidSyntax`] error.

use crate::foundation::{ErrorKind, ValidationError};

/// Separator between items of an `in` list.
pub const LIST_SEPARATOR: char = ',';

fn invalid_argument(argument: &str) -> ValidationError {
    ValidationError::new(ErrorKind::InvalidSyntax).with_param("argument", argument.to_owned())
}

/// Parses a signed decimal integer. A leading `+` or `-` is accepted,
/// surrounding whitespace is not.
pub fn parse_int(argument: &str) -> Result<i64, ValidationError> {
    argument.parse().map_err(|_| invalid_argument(argument))
}

/// Parses a non-negative length.
pub fn parse_len(argument: &str) -> Result<usize, ValidationError> {
    argument.parse().map_err(|_| invalid_argument(argument))
}

/// Splits an `in` list. Items are not trimmed; empty items are kept.
pub fn split_list(argument: &str) -> std::str::Split<'_, char> {
    argument.split(LIST_SEPARATOR)
}

/// Splits an `in` list and parses every item as an integer.
///
/// One bad item fails the whole list.
pub fn parse_int_list(argument: &str) -> Result<Vec<i64>, ValidationError> {
    split_list(argument)
        .map(|item| parse_int(item).map_err(|_| invalid_argument(argument)))
        .collect()
}
