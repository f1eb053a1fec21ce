//! Top-level shape check
//!
//! [`validate`](crate::validate) accepts anything that implements [`Inspect`].
//! Records (types deriving or implementing [`Record`]) report themselves as
//! [`Shape::Record`]; every other type reports [`Shape::Value`] and is
//! rejected with [`ValidateError::NotStruct`](crate::ValidateError::NotStruct).
//!
//! Pointer-like wrappers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) are *not*
//! looked through: the record itself must be passed.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::record::Record;

/// Coarse classification of a non-record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ValueKind {
    /// Signed integer.
    Integer,
    /// Unsigned integer.
    Unsigned,
    /// Floating point number.
    Float,
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// Text (`str`, `String`, ...).
    Text,
    /// Homogeneous sequence (`Vec`, slice, array, ...).
    Sequence,
    /// Key-value map.
    Map,
    /// `Option<T>`.
    Optional,
    /// Tuple or unit.
    Tuple,
    /// Reference or smart pointer.
    Pointer,
    /// Any other type, such as a nested record used as a field.
    Other,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Unsigned => "unsigned integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Optional => "option",
            Self::Tuple => "tuple",
            Self::Pointer => "pointer",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// What a value looks like to the validator.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// A record whose fields can be walked.
    Record(&'a dyn Record),
    /// Anything else.
    Value(ValueKind),
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Value(kind) => f.debug_tuple("Value").field(kind).finish(),
        }
    }
}

/// Reports the [`Shape`] of a value.
///
/// Implemented by `#[derive(Record)]` for structs and by this crate for
/// the standard scalar, text, collection and pointer types.
pub trait Inspect {
    /// Returns the shape of `self`.
    fn shape(&self) -> Shape<'_>;
}

macro_rules! impl_inspect_value {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Value(ValueKind::$kind)
                }
            }
        )+
    };
}

impl_inspect_value!(Integer => i8, i16, i32, i64, i128, isize);
impl_inspect_value!(Unsigned => u8, u16, u32, u64, u128, usize);
impl_inspect_value!(Float => f32, f64);
impl_inspect_value!(Bool => bool);
impl_inspect_value!(Char => char);
impl_inspect_value!(Text => str, String, Cow<'_, str>);
impl_inspect_value!(Tuple => ());

impl<T> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Map)
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Map)
    }
}

impl<T> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Optional)
    }
}

impl<T: ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Pointer)
    }
}

impl<T: ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Pointer)
    }
}

impl<T: ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Pointer)
    }
}

impl<T: ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Pointer)
    }
}

impl<T: ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Pointer)
    }
}

macro_rules! impl_inspect_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Inspect for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Value(ValueKind::Tuple)
            }
        }
    };
}

impl_inspect_tuple!(A);
impl_inspect_tuple!(A, B);
impl_inspect_tuple!(A, B, C);
impl_inspect_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: Inspect + ?Sized>(value: &T) -> Option<ValueKind> {
        match value.shape() {
            Shape::Value(kind) => Some(kind),
            Shape::Record(_) => None,
        }
    }

    #[test]
    fn scalars_are_values() {
        assert_eq!(kind_of(&5_i32), Some(ValueKind::Integer));
        assert_eq!(kind_of(&5_u8), Some(ValueKind::Unsigned));
        assert_eq!(kind_of(&1.5_f64), Some(ValueKind::Float));
        assert_eq!(kind_of(&true), Some(ValueKind::Bool));
        assert_eq!(kind_of("text"), Some(ValueKind::Text));
    }

    #[test]
    fn collections_are_values() {
        assert_eq!(kind_of(&vec![1, 2]), Some(ValueKind::Sequence));
        assert_eq!(kind_of(&[1, 2, 3]), Some(ValueKind::Sequence));
        assert_eq!(kind_of(&HashMap::<String, i64>::new()), Some(ValueKind::Map));
        assert_eq!(kind_of(&Some(3)), Some(ValueKind::Optional));
    }

    #[test]
    fn pointers_are_not_looked_through() {
        let boxed = Box::new(3_i64);
        assert_eq!(kind_of(&boxed), Some(ValueKind::Pointer));
        assert_eq!(kind_of(&Arc::new(3_i64)), Some(ValueKind::Pointer));
        assert_eq!(kind_of(&&3_i64), Some(ValueKind::Pointer));
    }
}
