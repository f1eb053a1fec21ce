//! Built-in rule evaluators
//!
//! One validator per rule and field kind:
//!
//! | Rule | Integer field | Text field |
//! |------|---------------|------------|
//! | `len:N` | (unknown rule) | [`ExactLength`] |
//! | `in:a,b` | [`OneOf<i64>`](OneOf) | [`OneOf<&str>`](OneOf) |
//! | `min:N` | [`Min<i64>`](Min) | [`MinLength`] |
//! | `max:N` | [`Max<i64>`](Max) | [`MaxLength`] |
//!
//! Each has a `from_argument` constructor that parses the raw directive
//! argument; see [`args`] for the argument grammar.

pub mod args;
pub mod length;
pub mod membership;
pub mod range;

pub use args::{LIST_SEPARATOR, parse_int, parse_int_list, parse_len, split_list};
pub use length::{ExactLength, MaxLength, MinLength, exact_length, max_length, min_length};
pub use membership::{OneOf, one_of};
pub use range::{Max, Min, max, min};
