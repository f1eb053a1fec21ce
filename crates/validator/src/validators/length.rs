//! Text length validators
//!
//! Length is the UTF-8 byte length of the text, so `"héllo"` has length 6.

use crate::foundation::{ErrorKind, ValidationError};
use crate::validators::args::{parse_int, parse_len};

/// Byte length of `input`, saturating at `i64::MAX`.
#[inline]
pub(crate) fn byte_len(input: &str) -> i64 {
    i64::try_from(input.len()).unwrap_or(i64::MAX)
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// `len:N` passes iff the text is exactly `N` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.len() == self.length }
    error(self, input) {
        ValidationError::new(ErrorKind::Len)
            .with_param("len", self.length.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Builds the rule from a `len` argument.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_len(argument).map(Self::new)
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// `min:N` on text: the text is at least `N` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i64 } for str;
    rule(self, input) { byte_len(input) >= self.min }
    error(self, input) {
        ValidationError::new(ErrorKind::Min)
            .with_param("min", self.min.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn min_length(min: i64);
}

impl MinLength {
    /// Builds the rule from a `min` argument.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_int(argument).map(Self::new)
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// `max:N` on text: the text is at most `N` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i64 } for str;
    rule(self, input) { byte_len(input) <= self.max }
    error(self, input) {
        ValidationError::new(ErrorKind::Max)
            .with_param("max", self.max.to_string())
            .with_param("actual", input.len().to_string())
    }
    fn max_length(max: i64);
}

impl MaxLength {
    /// Builds the rule from a `max` argument.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_int(argument).map(Self::new)
    }
}

// ============================================================================
// TESTS
// ============================================================================
