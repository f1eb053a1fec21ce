//! Core validation types and traits
//!
//! This module contains the building blocks every other module uses:
//!
//! - **Records**: [`Record`], [`FieldDescriptor`], [`Visibility`]
//! - **Values**: [`FieldValue`], [`FieldKind`], [`AsFieldValue`]
//! - **Shape check**: [`Inspect`], [`Shape`], [`ValueKind`]
//! - **Rules**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorKind`], [`ValidateError`]

pub mod error;
pub mod inspect;
pub mod record;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, ValidateError, ValidationError, ValidationErrors};
pub use inspect::{Inspect, Shape, ValueKind};
pub use record::{FieldDescriptor, Record, Visibility};
pub use traits::Validate;
pub use value::{AsFieldValue, FieldKind, FieldValue};
