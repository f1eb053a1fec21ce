//! Numeric bound validators
//!
//! Both bounds are inclusive: a value equal to the bound passes.

use std::fmt::Display;

use crate::foundation::{ErrorKind, ValidationError};
use crate::validators::args::parse_int;

crate::validator! {
    /// `min:N` on integers: the value is at least `N`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new(ErrorKind::Min)
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

crate::validator! {
    /// `max:N` on integers: the value is at most `N`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new(ErrorKind::Max)
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

impl Min<i64> {
    /// Builds the rule from a `min` argument.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_int(argument).map(Self::new)
    }
}

impl Max<i64> {
    /// Builds the rule from a `max` argument.
    pub fn from_argument(argument: &str) -> Result<Self, ValidationError> {
        parse_int(argument).map(Self::new)
    }
}
