//! Record field tables
//!
//! Rust has no runtime reflection, so a record describes its own fields
//! through [`Record`]: a static table of [`FieldDescriptor`]s plus an
//! accessor that reads one field by position. `#[derive(Record)]` generates
//! both; hand-written impls are fine too.
//!
//! ```rust
//! use fieldtag::{FieldDescriptor, FieldValue, Inspect, Record, Shape, Visibility};
//!
//! struct Order {
//!     pub quantity: i64,
//!     pub sku: String,
//! }
//!
//! impl Record for Order {
//!     fn type_name(&self) -> &'static str {
//!         "Order"
//!     }
//!
//!     fn fields(&self) -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::new("quantity", Visibility::Public, Some("min:1")),
//!             FieldDescriptor::new("sku", Visibility::Public, Some("len:8")),
//!         ];
//!         FIELDS
//!     }
//!
//!     fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
//!         match index {
//!             0 => Some(FieldValue::Integer(self.quantity)),
//!             1 => Some(FieldValue::Text(&self.sku)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Inspect for Order {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(self)
//!     }
//! }
//!
//! let order = Order { quantity: 0, sku: "AB-12345".into() };
//! let report = fieldtag::validate(&order).unwrap_err();
//! assert_eq!(report.to_string(), "failed 'min' validator");
//! ```

use crate::foundation::value::FieldValue;

/// How far a field is visible from its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`.
    Public,
    /// Declared `pub(crate)`, `pub(super)` or `pub(in path)`.
    Restricted,
    /// No visibility modifier.
    Private,
}

impl Visibility {
    /// Only [`Visibility::Public`] fields may be validated.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Static metadata for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared (`"0"`, `"1"`, ... for tuple structs).
    pub name: &'static str,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Raw directive text, if the field carries one.
    pub directive: Option<&'static str>,
}

impl FieldDescriptor {
    /// Creates a descriptor. Usable in `const` tables.
    #[must_use]
    pub const fn new(
        name: &'static str,
        visibility: Visibility,
        directive: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            visibility,
            directive,
        }
    }

    /// Returns true if the field is visible outside its defining module.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}

/// A value whose fields can be walked by the validator.
///
/// # Contract
///
/// - [`fields`](Record::fields) lists every field in declaration order.
/// - [`field_value`](Record::field_value) takes a position into that table.
///   It is only called for visible fields that carry a directive, and may
///   return `None` for any other position.
pub trait Record {
    /// Name of the record type, used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// The field table, in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Reads the field at `index`.
    fn field_value(&self, index: usize) -> Option<FieldValue<'_>>;
}
