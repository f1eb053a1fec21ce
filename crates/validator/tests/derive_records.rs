//! End-to-end validation of derived records.

use std::collections::HashMap;
use std::sync::Arc;

use fieldtag::{ErrorKind, Record, ValidateError, ValueKind, validate};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn kinds_of<T: fieldtag::Inspect + ?Sized>(value: &T) -> Vec<ErrorKind> {
    match validate(value) {
        Ok(()) => Vec::new(),
        Err(ValidateError::Invalid(report)) => report.kinds(),
        Err(other) => panic!("unexpected structural error: {other}"),
    }
}

// ============================================================================
// END TO END
// ============================================================================

#[derive(Record)]
struct Person {
    #[validate("min:0")]
    pub age: i32,
    #[validate("len:3")]
    pub name: String,
}

#[test]
fn person_with_negative_age() {
    init_tracing();

    let person = Person {
        age: -1,
        name: "bob".to_string(),
    };
    let report = validate(&person).unwrap_err().into_errors().unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report.errors()[0].kind, ErrorKind::Min);
    assert_eq!(report.errors()[0].field.as_deref(), Some("age"));
    assert_eq!(report.to_string(), "failed 'min' validator");
}

#[test]
fn valid_person_passes() {
    let person = Person {
        age: 0,
        name: "amy".to_string(),
    };
    assert_eq!(validate(&person), Ok(()));
}

// ============================================================================
// RULES THROUGH THE DERIVE
// ============================================================================

#[derive(Record)]
struct Signup {
    #[validate("min:18")]
    pub age: i64,
    #[validate("max:150")]
    pub weight: i16,
    #[validate("in:free,pro")]
    pub plan: String,
    #[validate("in:1,2,3")]
    pub tier: i8,
    #[validate("min:3")]
    pub handle: &'static str,
    #[validate("max:5")]
    pub motto: String,
}

fn signup() -> Signup {
    Signup {
        age: 18,
        weight: 150,
        plan: "pro".to_string(),
        tier: 3,
        handle: "abc",
        motto: "hello".to_string(),
    }
}

#[test]
fn bounds_are_inclusive() {
    assert_eq!(kinds_of(&signup()), Vec::new());
}

#[rstest]
#[case::too_young(Signup { age: 17, ..signup() }, ErrorKind::Min)]
#[case::too_heavy(Signup { weight: 151, ..signup() }, ErrorKind::Max)]
#[case::unknown_plan(Signup { plan: "gold".to_string(), ..signup() }, ErrorKind::In)]
#[case::unknown_tier(Signup { tier: 4, ..signup() }, ErrorKind::In)]
#[case::short_handle(Signup { handle: "ab", ..signup() }, ErrorKind::Min)]
#[case::long_motto(Signup { motto: "hello!".to_string(), ..signup() }, ErrorKind::Max)]
fn single_rule_failure(#[case] value: Signup, #[case] expected: ErrorKind) {
    assert_eq!(kinds_of(&value), vec![expected]);
}

#[derive(Record)]
struct Misconfigured {
    #[validate("len:2")]
    pub count: i32,
    #[validate("size:2")]
    pub label: String,
    #[validate("min")]
    pub floor: i32,
    #[validate("min:1:2")]
    pub ceiling: i32,
    #[validate("max:")]
    pub limit: i32,
    #[validate("in:1,two")]
    pub choice: i32,
    #[validate("")]
    pub blank: String,
}

#[test]
fn directive_problems_are_reported_per_field() {
    let value = Misconfigured {
        count: 2,
        label: "ok".to_string(),
        floor: 0,
        ceiling: 0,
        limit: 0,
        choice: 1,
        blank: String::new(),
    };

    assert_eq!(
        kinds_of(&value),
        vec![
            ErrorKind::UnknownIntRule,
            ErrorKind::UnknownTextRule,
            ErrorKind::InvalidSyntax,
            ErrorKind::InvalidSyntax,
            ErrorKind::InvalidSyntax,
            ErrorKind::InvalidSyntax,
            ErrorKind::InvalidSyntax,
        ]
    );
}

// ============================================================================
// VISIBILITY AND MISSING DIRECTIVES
// ============================================================================

mod credentials {
    use fieldtag::Record;

    #[derive(Record)]
    pub struct Credentials {
        #[validate("len:8")]
        pub user: String,
        #[validate("len:4")]
        pin: String,
        #[validate("min:1")]
        pub(crate) attempts: i32,
        pub note: String,
    }

    impl Credentials {
        pub fn new(user: &str, pin: &str, attempts: i32) -> Self {
            Self {
                user: user.to_string(),
                pin: pin.to_string(),
                attempts,
                note: "x".repeat(64),
            }
        }

        pub fn pin(&self) -> &str {
            &self.pin
        }
    }
}

#[test]
fn non_public_fields_are_reported_once_each() {
    let value = credentials::Credentials::new("ab", "a valid pin would not matter", 5);
    let report = validate(&value).unwrap_err().into_errors().unwrap();

    assert_eq!(
        report.kinds(),
        vec![
            ErrorKind::Len,
            ErrorKind::UnexportedField,
            ErrorKind::UnexportedField
        ]
    );
    let fields: Vec<_> = report.iter().filter_map(|e| e.field.as_deref()).collect();
    assert_eq!(fields, vec!["user", "pin", "attempts"]);
    assert!(!value.pin().is_empty());
}

#[test]
fn field_table_matches_declaration() {
    use fieldtag::Visibility;

    let value = credentials::Credentials::new("abcdefgh", "1234", 1);
    let table: Vec<_> = value
        .fields()
        .iter()
        .map(|f| (f.name, f.visibility, f.directive))
        .collect();

    assert_eq!(
        table,
        vec![
            ("user", Visibility::Public, Some("len:8")),
            ("pin", Visibility::Private, Some("len:4")),
            ("attempts", Visibility::Restricted, Some("min:1")),
            ("note", Visibility::Public, None),
        ]
    );
    assert_eq!(value.type_name(), "Credentials");
}

#[derive(Record)]
struct Unchecked {
    pub flag: bool,
    pub ratio: f64,
    pub lookup: HashMap<String, i32>,
    pub nested: Person,
}

#[test]
fn fields_without_directives_are_ignored() {
    let value = Unchecked {
        flag: true,
        ratio: f64::NAN,
        lookup: HashMap::new(),
        nested: Person {
            age: -100,
            name: String::new(),
        },
    };
    assert_eq!(validate(&value), Ok(()));
}

// ============================================================================
// SEQUENCES
// ============================================================================

#[derive(Record)]
struct Batch {
    #[validate("in:1,2")]
    pub codes: Vec<i64>,
    #[validate("len:2")]
    pub regions: [&'static str; 3],
    #[validate("in:1,2")]
    pub empty: Vec<i32>,
    #[validate("garbage")]
    pub also_empty: Vec<String>,
}

#[test]
fn sequences_check_each_element() {
    let value = Batch {
        codes: vec![1, 2, 5],
        regions: ["eu", "usa", "jp"],
        empty: Vec::new(),
        also_empty: Vec::new(),
    };
    let report = validate(&value).unwrap_err().into_errors().unwrap();

    assert_eq!(report.kinds(), vec![ErrorKind::In, ErrorKind::Len]);
    let located: Vec<_> = report
        .iter()
        .map(|e| (e.field.as_deref(), e.index))
        .collect();
    assert_eq!(located, vec![(Some("codes"), Some(2)), (Some("regions"), Some(1))]);
}

#[test]
fn every_failing_element_is_reported() {
    let value = Batch {
        codes: vec![7, 8, 9],
        regions: ["eu", "us", "jp"],
        empty: Vec::new(),
        also_empty: Vec::new(),
    };
    assert_eq!(kinds_of(&value), vec![ErrorKind::In; 3]);
}

#[derive(Record)]
struct Borrowed<'a> {
    #[validate("in:1,2")]
    pub codes: &'a [i64],
    #[validate("len:2")]
    pub names: &'a [&'a str],
    #[validate("len:3")]
    pub owner: &'a String,
    #[validate("in:1,2")]
    pub boxed: Box<[i64]>,
}

#[test]
fn borrowed_and_boxed_fields_are_read_through() {
    let codes = [1, 2, 5];
    let names = ["ab", "cde"];
    let owner = "bob".to_string();
    let value = Borrowed {
        codes: &codes,
        names: &names,
        owner: &owner,
        boxed: vec![1, 9].into_boxed_slice(),
    };
    let report = validate(&value).unwrap_err().into_errors().unwrap();

    assert_eq!(report.kinds(), vec![ErrorKind::In, ErrorKind::Len, ErrorKind::In]);
    let located: Vec<_> = report
        .iter()
        .map(|e| (e.field.as_deref(), e.index))
        .collect();
    assert_eq!(
        located,
        vec![
            (Some("codes"), Some(2)),
            (Some("names"), Some(1)),
            (Some("boxed"), Some(1)),
        ]
    );
}

// ============================================================================
// UNSUPPORTED KINDS
// ============================================================================

#[derive(Record)]
struct Exotic {
    #[validate("min:1")]
    pub flag: bool,
    #[validate("min:1")]
    pub ratio: f64,
    #[validate("min:1")]
    pub count: u32,
    #[validate("min:1")]
    pub maybe: Option<i32>,
    #[validate("min:1")]
    pub nested: Person,
    #[validate("min:1")]
    pub ratios: Vec<f64>,
    #[validate("min:1")]
    pub people: Vec<Person>,
    #[validate("min:1")]
    pub nobody: Vec<Person>,
    #[validate("min:1")]
    pub matrix: Vec<Vec<i32>>,
}

#[test]
fn unsupported_kinds_are_reported() {
    let value = Exotic {
        flag: true,
        ratio: 1.5,
        count: 3,
        maybe: Some(3),
        nested: Person {
            age: 1,
            name: "bob".to_string(),
        },
        ratios: vec![2.0],
        people: vec![Person {
            age: 1,
            name: "bob".to_string(),
        }],
        nobody: Vec::new(),
        matrix: vec![vec![1]],
    };

    assert_eq!(
        kinds_of(&value),
        vec![
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedType,
            ErrorKind::UnsupportedSequenceType,
            ErrorKind::UnsupportedSequenceType,
            ErrorKind::UnsupportedSequenceType,
        ]
    );
}

// ============================================================================
// SHAPE CHECK
// ============================================================================

#[rstest]
#[case::integer(validate(&5_i32), ValueKind::Integer)]
#[case::text(validate("bob"), ValueKind::Text)]
#[case::sequence(validate(&vec![1, 2, 3]), ValueKind::Sequence)]
#[case::map(validate(&HashMap::<String, i32>::new()), ValueKind::Map)]
#[case::boxed(validate(&Box::new(Person { age: -1, name: String::new() })), ValueKind::Pointer)]
#[case::shared(validate(&Arc::new(Person { age: -1, name: String::new() })), ValueKind::Pointer)]
fn non_records_are_rejected(
    #[case] result: Result<(), ValidateError>,
    #[case] expected: ValueKind,
) {
    assert_eq!(result, Err(ValidateError::NotStruct { kind: expected }));
}

#[test]
fn reference_to_record_is_rejected() {
    let person = Person {
        age: -1,
        name: String::new(),
    };
    let error = validate(&&person).unwrap_err();
    assert!(error.is_not_struct());
    assert_eq!(error.to_string(), "wrong argument given, should be a struct");
}

// ============================================================================
// TUPLE, UNIT AND GENERIC RECORDS
// ============================================================================

#[derive(Record)]
struct Pair(#[validate("min:0")] pub i32, #[validate("len:2")] pub String);

#[derive(Record)]
struct Nothing;

#[derive(Record)]
struct Wrapped<T> {
    #[validate("max:10")]
    pub inner: T,
}

#[test]
fn tuple_fields_use_positions() {
    let report = validate(&Pair(-1, "abc".to_string()))
        .unwrap_err()
        .into_errors()
        .unwrap();
    let fields: Vec<_> = report.iter().filter_map(|e| e.field.as_deref()).collect();
    assert_eq!(fields, vec!["0", "1"]);
}

#[test]
fn unit_record_is_always_valid() {
    assert_eq!(validate(&Nothing), Ok(()));
}

#[test]
fn generic_records() {
    assert_eq!(validate(&Wrapped { inner: 10_i32 }), Ok(()));
    assert_eq!(kinds_of(&Wrapped { inner: 11_i64 }), vec![ErrorKind::Max]);
    assert_eq!(kinds_of(&Wrapped { inner: "short" }), Vec::new());
    assert_eq!(
        kinds_of(&Wrapped {
            inner: vec!["far too long"]
        }),
        vec![ErrorKind::Max]
    );
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn repeated_validation_is_identical() {
    let value = Batch {
        codes: vec![3, 1, 4],
        regions: ["a", "bb", "ccc"],
        empty: Vec::new(),
        also_empty: Vec::new(),
    };
    assert_eq!(validate(&value), validate(&value));
}
