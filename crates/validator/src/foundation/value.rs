//! Runtime field values
//!
//! A record field is read into a [`FieldValue`], a closed set of the shapes
//! the rule families understand. Anything outside that set is carried as
//! [`FieldValue::Unsupported`] so the dispatcher can report it.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::inspect::ValueKind;

/// A borrowed view of one field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Signed integer.
    Integer(i64),
    /// Text.
    Text(&'a str),
    /// Homogeneous sequence; each element is converted on its own.
    Sequence(Vec<FieldValue<'a>>),
    /// Any kind no rule family accepts.
    Unsupported(ValueKind),
}

/// Rule family a field is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single integer, integer rules.
    Integer,
    /// Single text value, text rules.
    Text,
    /// Integer rules applied per element.
    IntegerSequence,
    /// Text rules applied per element.
    TextSequence,
    /// Sequence with no elements. Nothing is validated.
    EmptySequence,
    /// Not validatable. Carries whether it is a non-empty sequence.
    Unsupported {
        /// The value is a non-empty sequence of an unsupported element kind.
        sequence: bool,
    },
}

impl FieldValue<'_> {
    /// Classifies this value. Sequences are classified by their first element.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Text(_) => FieldKind::Text,
            Self::Sequence(elements) => match elements.first() {
                None => FieldKind::EmptySequence,
                Some(Self::Integer(_)) => FieldKind::IntegerSequence,
                Some(Self::Text(_)) => FieldKind::TextSequence,
                Some(_) => FieldKind::Unsupported { sequence: true },
            },
            Self::Unsupported(_) => FieldKind::Unsupported { sequence: false },
        }
    }
}

/// Conversion of a field into a [`FieldValue`].
///
/// `#[derive(Record)]` calls this on every field it reads. Implement it for
/// your own newtypes to make them validatable.
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_integer {
    ($($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i64::from(*self))
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64);

impl AsFieldValue for isize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self as i64)
    }
}

macro_rules! impl_unsupported {
    ($kind:ident => $($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported(ValueKind::$kind)
                }
            }
        )+
    };
}

// i128 does not fit the integer rule family without loss.
impl_unsupported!(Integer => i128);
impl_unsupported!(Unsigned => u8, u16, u32, u64, u128, usize);
impl_unsupported!(Float => f32, f64);
impl_unsupported!(Bool => bool);
impl_unsupported!(Char => char);
impl_unsupported!(Tuple => ());

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

// A field read through a reference or an owning pointer is validated as
// the value it points to.
impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        T::as_field_value(self)
    }
}

macro_rules! impl_forward {
    ($($ptr:ident),+) => {
        $(
            impl<T: AsFieldValue + ?Sized> AsFieldValue for $ptr<T> {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    T::as_field_value(self)
                }
            }
        )+
    };
}

impl_forward!(Box, Rc, Arc);

impl<T: AsFieldValue> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(AsFieldValue::as_field_value).collect())
    }
}

impl<T: AsFieldValue, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_slice().as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_slice().as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for VecDeque<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(AsFieldValue::as_field_value).collect())
    }
}

impl<T> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported(ValueKind::Optional)
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported(ValueKind::Map)
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported(ValueKind::Map)
    }
}
