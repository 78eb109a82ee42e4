use super::*;

#[test]
fn error_body_parses_the_expected_shape() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"errors":[{"message":"Email is required"}]}"#).expect("parses");
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].message, "Email is required");
}

#[test]
fn error_body_tolerates_extra_keys() {
    let raw = r#"{"ok":false,"errors":[{"message":"Bad","field":"email"}]}"#;
    let body: ErrorBody = serde_json::from_str(raw).expect("parses");
    assert_eq!(body.errors[0].message, "Bad");
}

#[test]
fn error_body_without_errors_key_fails_to_parse() {
    assert!(serde_json::from_str::<ErrorBody>(r#"{"detail":"nope"}"#).is_err());
}

#[test]
fn error_item_without_message_fails_to_parse() {
    assert!(serde_json::from_str::<ErrorBody>(r#"{"errors":[{"code":42}]}"#).is_err());
}
