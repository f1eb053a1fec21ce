//! Field reading for `#[derive(Record)]`.
//!
//! The derive cannot know whether a field's type implements
//! [`AsFieldValue`]. It reads every field through
//! `(&&&Probe(&self.field)).read_field()` and method resolution picks the
//! most specific reader:
//!
//! 1. [`ReadSupported`]: the type implements [`AsFieldValue`];
//! 2. [`ReadSequence`]: a `Vec`, `VecDeque`, array or slice of some other
//!    type;
//! 3. [`ReadUnsupported`]: anything else, such as a nested record.
//!
//! This only resolves for concrete types. Generic field types are bounded
//! by `AsFieldValue` in the generated impl instead.

use std::collections::VecDeque;

use crate::foundation::{AsFieldValue, FieldValue, ValueKind};

/// Borrowed field wrapper driving reader selection.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Reader for types with an [`AsFieldValue`] impl.
pub trait ReadSupported<'a> {
    fn read_field(&self) -> FieldValue<'a>;
}

impl<'a, T: AsFieldValue + ?Sized> ReadSupported<'a> for &&Probe<'a, T> {
    #[inline]
    fn read_field(&self) -> FieldValue<'a> {
        T::as_field_value(self.0)
    }
}

/// Reader for sequences of unsupported element types.
pub trait ReadSequence<'a> {
    fn read_field(&self) -> FieldValue<'a>;
}

/// One unsupported placeholder per element, so an empty sequence stays empty.
fn opaque_elements(len: usize) -> FieldValue<'static> {
    FieldValue::Sequence(vec![FieldValue::Unsupported(ValueKind::Other); len])
}

impl<'a, T> ReadSequence<'a> for &Probe<'a, Vec<T>> {
    fn read_field(&self) -> FieldValue<'a> {
        opaque_elements(self.0.len())
    }
}

impl<'a, T> ReadSequence<'a> for &Probe<'a, VecDeque<T>> {
    fn read_field(&self) -> FieldValue<'a> {
        opaque_elements(self.0.len())
    }
}

impl<'a, T> ReadSequence<'a> for &Probe<'a, &[T]> {
    fn read_field(&self) -> FieldValue<'a> {
        opaque_elements(self.0.len())
    }
}

impl<'a, T> ReadSequence<'a> for &Probe<'a, Box<[T]>> {
    fn read_field(&self) -> FieldValue<'a> {
        opaque_elements(self.0.len())
    }
}

impl<'a, T, const N: usize> ReadSequence<'a> for &Probe<'a, [T; N]> {
    fn read_field(&self) -> FieldValue<'a> {
        opaque_elements(N)
    }
}

/// Fallback reader.
pub trait ReadUnsupported<'a> {
    fn read_field(&self) -> FieldValue<'a>;
}

impl<'a, T: ?Sized> ReadUnsupported<'a> for Probe<'a, T> {
    fn read_field(&self) -> FieldValue<'a> {
        FieldValue::Unsupported(ValueKind::Other)
    }
}
