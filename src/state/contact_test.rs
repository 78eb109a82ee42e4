use super::*;

// =============================================================
// Status transitions
// =============================================================

#[test]
fn begin_sending_shows_sending_text_immediately() {
    let mut state = ContactState::default();
    state.begin_sending();
    assert_eq!(state.status.text, SENDING_TEXT);
    assert_eq!(state.status.kind, Some(StatusKind::Sending));
    assert!(state.status.visible);
}

#[test]
fn resolve_accepted_shows_success_text() {
    let mut state = ContactState::default();
    state.begin_sending();
    state.resolve(&SubmitOutcome::Accepted);
    assert_eq!(state.status.text, SUCCESS_TEXT);
    assert_eq!(state.status.kind, Some(StatusKind::Success));
    assert!(state.status.visible);
}

#[test]
fn resolve_rejected_with_messages_uses_server_text_verbatim() {
    let mut state = ContactState::default();
    state.begin_sending();
    state.resolve(&SubmitOutcome::Rejected(Some("Email is required".to_owned())));
    assert_eq!(state.status.text, "Email is required");
    assert_eq!(state.status.kind, Some(StatusKind::Error));
}

#[test]
fn resolve_rejected_without_messages_uses_generic_text() {
    let mut state = ContactState::default();
    state.resolve(&SubmitOutcome::Rejected(None));
    assert_eq!(state.status.text, GENERIC_ERROR_TEXT);
    assert_eq!(state.status.kind, Some(StatusKind::Error));
}

#[test]
fn resolve_failed_uses_network_text() {
    let mut state = ContactState::default();
    state.resolve(&SubmitOutcome::Failed);
    assert_eq!(state.status.text, NETWORK_ERROR_TEXT);
    assert_eq!(state.status.kind, Some(StatusKind::Error));
}

// =============================================================
// Epoch-guarded clearing
// =============================================================

#[test]
fn clear_with_current_token_empties_status() {
    let mut state = ContactState::default();
    state.begin_sending();
    let token = state.resolve(&SubmitOutcome::Accepted);
    state.clear_if_current(token);
    assert_eq!(state.status, StatusMessage::default());
    assert!(state.status.text.is_empty());
    assert_eq!(state.status.kind, None);
    assert!(!state.status.visible);
}

#[test]
fn stale_token_does_not_clear_newer_status() {
    let mut state = ContactState::default();
    state.begin_sending();
    let first = state.resolve(&SubmitOutcome::Accepted);

    // A second submission supersedes the first before its timer fires.
    state.begin_sending();
    let second = state.resolve(&SubmitOutcome::Rejected(None));

    state.clear_if_current(first);
    assert_eq!(state.status.text, GENERIC_ERROR_TEXT);
    assert!(state.status.visible);

    state.clear_if_current(second);
    assert!(state.status.text.is_empty());
}

#[test]
fn every_transition_bumps_the_epoch() {
    let mut state = ContactState::default();
    let a = state.begin_sending();
    let b = state.resolve(&SubmitOutcome::Accepted);
    let c = state.begin_sending();
    assert!(a < b && b < c);
}

#[test]
fn clear_does_not_bump_the_epoch() {
    let mut state = ContactState::default();
    let token = state.begin_sending();
    state.clear_if_current(token);
    assert_eq!(state.epoch, token);
}

// =============================================================
// StatusKind
// =============================================================

#[test]
fn status_kind_css_classes_are_distinct() {
    assert_eq!(StatusKind::Sending.css_class(), "sending");
    assert_eq!(StatusKind::Success.css_class(), "success");
    assert_eq!(StatusKind::Error.css_class(), "error");
}
