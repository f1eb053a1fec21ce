//! Generic records get an `AsFieldValue` bound on directive fields.

use fieldtag::{Record, validate};

#[derive(Record)]
pub struct Bounded<T> {
    #[validate("max:10")]
    pub value: T,
}

#[derive(Record)]
pub struct Borrowed<'a> {
    #[validate("in:on,off")]
    pub state: &'a str,
}

fn main() {
    assert!(validate(&Bounded { value: 3_i32 }).is_ok());
    assert!(validate(&Bounded { value: 11_i64 }).is_err());
    assert!(validate(&Bounded { value: vec![1_i32, 2] }).is_ok());

    let state = String::from("off");
    assert!(validate(&Borrowed { state: &state }).is_ok());
}
