//! Named structs with every field form the derive accepts.

use fieldtag::{ErrorKind, Record, validate};

#[derive(Record)]
pub struct Account {
    #[validate("min:18")]
    pub age: i32,

    #[validate("in:admin,user")]
    pub role: String,

    #[validate("len:2")]
    pub regions: Vec<&'static str>,

    #[validate("max:3")]
    secret: String,

    #[validate("min:1")]
    pub(crate) retries: i64,

    #[validate("min:1")]
    pub profile: Profile,

    pub note: Option<String>,
}

#[derive(Record)]
pub struct Profile {
    #[validate("len:3")]
    pub r#type: String,
}

fn main() {
    let account = Account {
        age: 30,
        role: "user".to_string(),
        regions: vec!["eu", "us"],
        secret: "hunter2".to_string(),
        retries: 0,
        profile: Profile {
            r#type: "pro".to_string(),
        },
        note: None,
    };

    let report = validate(&account).unwrap_err().into_errors().unwrap();
    assert_eq!(
        report.kinds(),
        vec![
            ErrorKind::UnexportedField,
            ErrorKind::UnexportedField,
            ErrorKind::UnsupportedType,
        ]
    );
    assert_eq!(account.secret.len(), 7);
    assert_eq!(account.retries, 0);
    assert!(account.note.is_none());
    assert!(validate(&account.profile).is_ok());
}
