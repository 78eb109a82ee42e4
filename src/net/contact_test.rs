use super::*;

// =============================================================
// Response classification
// =============================================================

#[test]
fn ok_response_is_accepted_regardless_of_body() {
    assert_eq!(classify_response(true, ""), SubmitOutcome::Accepted);
    assert_eq!(classify_response(true, "not json"), SubmitOutcome::Accepted);
}

#[test]
fn rejection_with_single_error_uses_its_message() {
    let outcome = classify_response(false, r#"{"errors":[{"message":"Email is required"}]}"#);
    assert_eq!(outcome, SubmitOutcome::Rejected(Some("Email is required".to_owned())));
}

#[test]
fn rejection_with_several_errors_joins_with_comma_space() {
    let body = r#"{"errors":[{"message":"Email is required"},{"message":"Name too short"}]}"#;
    let outcome = classify_response(false, body);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(Some("Email is required, Name too short".to_owned()))
    );
}

#[test]
fn rejection_with_unparseable_body_falls_back_to_generic() {
    assert_eq!(classify_response(false, "<html>500</html>"), SubmitOutcome::Rejected(None));
    assert_eq!(classify_response(false, ""), SubmitOutcome::Rejected(None));
}

#[test]
fn rejection_with_empty_error_list_falls_back_to_generic() {
    assert_eq!(classify_response(false, r#"{"errors":[]}"#), SubmitOutcome::Rejected(None));
}

#[test]
fn rejection_with_wrong_shape_falls_back_to_generic() {
    assert_eq!(
        classify_response(false, r#"{"error":"Email is required"}"#),
        SubmitOutcome::Rejected(None)
    );
}

// =============================================================
// Method normalization
// =============================================================

#[test]
fn method_is_uppercased_and_trimmed() {
    assert_eq!(normalize_method("post"), "POST");
    assert_eq!(normalize_method("  Get "), "GET");
}

#[test]
fn empty_method_defaults_to_post() {
    assert_eq!(normalize_method(""), "POST");
    assert_eq!(normalize_method("   "), "POST");
}

// =============================================================
// Non-hydrate stub
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_fails_outside_the_browser() {
    use std::task::{Context, Poll, Waker};

    let submission = ContactSubmission {
        action: "https://example.test/form".to_owned(),
        method: "post".to_owned(),
        fields: vec![("name".to_owned(), "A".to_owned())],
    };

    // The stub resolves without suspending, so a single poll settles it.
    let mut future = std::pin::pin!(submit(&submission));
    let mut context = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut context) {
        Poll::Ready(outcome) => assert_eq!(outcome, SubmitOutcome::Failed),
        Poll::Pending => panic!("stub submit should settle immediately"),
    }
}
