//! # fieldtag-macros
//!
//! Derive macro for the `fieldtag` crate. Use it through the re-export
//! `fieldtag::Record`; the generated code refers to `::fieldtag`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Also implements `Inspect`, so the struct can be passed to
/// `fieldtag::validate`.
///
/// # Field attributes
///
/// - `#[validate("rule:argument")]` - Directive checked against the field.
///   At most one per field. The directive text is checked when validating,
///   not when compiling.
///
/// Fields without the attribute are ignored. Only `pub` fields are read;
/// a directive on any other field is reported as an unexported field.
/// Named, tuple and unit structs are supported.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Signup {
///     #[validate("min:18")]
///     pub age: i32,
///
///     #[validate("in:free,pro")]
///     pub plan: String,
///
///     #[validate("len:2")]
///     pub country_codes: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
