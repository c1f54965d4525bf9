mod common;

use isbn_validator::{Reason, validate, validate_str};
use serde_json::json;

#[test]
fn test_non_text_input_is_wrong_format() {
    common::init_tracing();

    for input in [
        json!(123),
        json!(null),
        json!([]),
        json!(true),
        json!(9780306406157u64),
        json!({ "isbn": "9780306406157" }),
    ] {
        assert_eq!(
            validate(&input).into_pair(),
            (false, "wrong format"),
            "{}",
            input
        );
    }
}

#[test]
fn test_invalid_format() {
    common::init_tracing();

    for raw in [
        "",
        "abc",
        "123",
        "12345678",
        "123456789012",
        "12345678901234",
        "0471958697\t",
        "ISBN 0471958697",
    ] {
        assert_eq!(validate_str(raw).into_pair(), (false, "wrong format"), "{:?}", raw);
        assert_eq!(validate(&json!(raw)).reason(), Reason::WrongFormat);
    }
}

#[test]
fn test_isbn10_bad_checksum() {
    common::init_tracing();

    assert_eq!(validate_str("0471958698").into_pair(), (false, "validation failed"));
    assert_eq!(validate_str("0-471-95869-8").into_pair(), (false, "validation failed"));
    assert_eq!(validate_str("1554042951").into_pair(), (false, "validation failed"));
}

#[test]
fn test_isbn13_bad_checksum() {
    common::init_tracing();

    assert_eq!(validate_str("9780471958698").into_pair(), (false, "validation failed"));
    assert_eq!(validate_str("978-0-306-40615-8").into_pair(), (false, "validation failed"));
}

#[test]
fn test_valid_isbn10() {
    common::init_tracing();

    assert_eq!(validate_str("0471958697").into_pair(), (true, "validation pass"));
    assert_eq!(validate_str("0-471-95869-7").into_pair(), (true, "validation pass"));
    assert_eq!(validate_str("0 471 95869 7").into_pair(), (true, "validation pass"));

    // 'X' check digit, either case
    assert_eq!(validate_str("155404295X").into_pair(), (true, "validation pass"));
    assert_eq!(validate_str("1-55404-295-X").into_pair(), (true, "validation pass"));
    assert_eq!(validate_str("1-55404-295-x").into_pair(), (true, "validation pass"));
}

#[test]
fn test_valid_isbn13() {
    common::init_tracing();

    assert_eq!(validate_str("9780306406157").into_pair(), (true, "validation pass"));
    assert_eq!(validate_str("978-0-306-40615-7").into_pair(), (true, "validation pass"));
    assert_eq!(validate(&json!("978 0 471 95869 7")).into_pair(), (true, "validation pass"));
}

#[test]
fn test_validation_json_shape() {
    let body = serde_json::to_value(validate_str("978-0-306-40615-7")).unwrap();
    assert_eq!(body, json!({ "valid": true, "reason": "validation pass" }));
}
