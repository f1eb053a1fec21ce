//! Tuple and unit structs.

use fieldtag::{Record, validate};

#[derive(Record)]
pub struct Code(#[validate("len:3")] pub String, pub u8);

#[derive(Record)]
pub struct Marker;

#[derive(Record)]
pub struct Empty {}

fn main() {
    assert!(validate(&Code("abc".to_string(), 7)).is_ok());
    assert!(validate(&Code("abcd".to_string(), 7)).is_err());
    assert!(validate(&Marker).is_ok());
    assert!(validate(&Empty {}).is_ok());
}
