//! # fieldtag
//!
//! Declarative validation of struct fields. Each field carries a directive
//! of the form `rule:argument`; [`validate`] walks the record, runs every
//! directive and returns all failures at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldtag::{ErrorKind, Record, validate};
//!
//! #[derive(Record)]
//! struct User {
//!     #[validate("min:18")]
//!     pub age: i32,
//!     #[validate("in:admin,user")]
//!     pub role: String,
//!     #[validate("len:2")]
//!     pub tags: Vec<String>,
//!     pub note: String,
//! }
//!
//! let user = User {
//!     age: 17,
//!     role: "guest".into(),
//!     tags: vec!["ok".into(), "bad".into()],
//!     note: String::new(),
//! };
//!
//! let report = validate(&user).unwrap_err().into_errors().unwrap();
//! assert_eq!(report.kinds(), vec![ErrorKind::Min, ErrorKind::In, ErrorKind::Len]);
//! ```
//!
//! ## Rules
//!
//! | Rule | Integer field | Text field |
//! |------|---------------|------------|
//! | `len:N` | unknown rule | byte length is exactly `N` |
//! | `in:a,b` | value is one of the listed integers | value is one of the listed strings |
//! | `min:N` | value `>= N` | byte length `>= N` |
//! | `max:N` | value `<= N` | byte length `<= N` |
//!
//! Sequences (`Vec`, arrays, `VecDeque`) of integers or text apply the
//! rule to every element.
//!
//! ## Field visibility
//!
//! Only `pub` fields are validated. A directive on any other field is
//! reported as [`ErrorKind::UnexportedField`] and the value is never read.
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Record)]`.
//! - `serde`: `Serialize` for the error report, plus `to_json_value()`.

// ValidationError is returned by value from every rule; boxing it buys nothing here.
#![allow(clippy::result_large_err)]

extern crate self as fieldtag;

pub mod directive;
pub mod dispatch;
pub mod foundation;
mod macros;
pub mod prelude;
mod probe;
pub mod validators;
mod walker;

pub use foundation::{
    AsFieldValue, ErrorKind, FieldDescriptor, FieldKind, FieldValue, Inspect, Record, Shape,
    Validate, ValidateError, ValidationError, ValidationErrors, ValueKind, Visibility,
};
pub use walker::{validate, validate_record};

#[cfg(feature = "derive")]
pub use fieldtag_macros::Record;

/// Items used by `#[derive(Record)]` expansions. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::foundation::{
        AsFieldValue, FieldDescriptor, FieldValue, Inspect, Record, Shape, Visibility,
    };
    pub use crate::probe::{Probe, ReadSequence, ReadSupported, ReadUnsupported};
}
