//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldtag::prelude::*;
//!
//! assert!(min(0_i64).validate(&5).is_ok());
//! assert!(validate(&5_i64).is_err());
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::walker::{validate, validate_record};

#[cfg(feature = "derive")]
pub use fieldtag_macros::Record;

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    AsFieldValue, ErrorKind, Inspect, Record, Validate, ValidateError, ValidationError,
    ValidationErrors,
};

// ============================================================================
// VALIDATORS: Rule evaluators
// ============================================================================

pub use crate::validators::{
    ExactLength, Max, MaxLength, Min, MinLength, OneOf, exact_length, max, max_length, min,
    min_length, one_of,
};
