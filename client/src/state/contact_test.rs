use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
    let mut form = ContactFormState::default();
    form.edit(ContactField::Name, name.to_owned());
    form.edit(ContactField::Email, email.to_owned());
    form.edit(ContactField::Message, message.to_owned());
    form
}

// =============================================================
// ValidationError
// =============================================================

#[test]
fn validation_error_messages_are_user_facing() {
    assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::BadEmail.to_string(), "Please provide a valid email address.");
}

#[test]
fn validation_error_kinds_are_stable() {
    assert_eq!(ValidationError::MissingField.kind(), "missing-field");
    assert_eq!(ValidationError::BadEmail.kind(), "bad-email");
}

// =============================================================
// Record editing
// =============================================================

#[test]
fn record_starts_empty() {
    let form = ContactFormState::default();
    assert_eq!(form.record, ContactRecord::default());
    assert_eq!(form.status, FormStatus::Idle);
    assert!(form.pending_notice().is_none());
}

#[test]
fn edit_replaces_one_field() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    form.edit(ContactField::Message, "Hello again".to_owned());
    assert_eq!(form.record.get(ContactField::Name), "Ada");
    assert_eq!(form.record.get(ContactField::Email), "ada@example.com");
    assert_eq!(form.record.get(ContactField::Message), "Hello again");
}

// =============================================================
// Missing fields
// =============================================================

#[test]
fn blank_field_yields_missing_field_and_keeps_values() {
    let cases = [
        ("", "ada@example.com", "Hi"),
        ("Ada", "", "Hi"),
        ("Ada", "ada@example.com", ""),
        ("   ", "ada@example.com", "Hi"),
        ("Ada", " \t", "Hi"),
        ("Ada", "ada@example.com", "\n  "),
    ];
    for (name, email, message) in cases {
        let mut form = filled(name, email, message);
        let before = form.record.clone();
        assert_eq!(form.submit(), Err(ValidationError::MissingField));
        assert_eq!(form.record, before);
        assert_eq!(form.status, FormStatus::Error(ValidationError::MissingField));
        assert_eq!(form.status.error_text(), "Please fill in all fields.");
        assert_eq!(form.status.success_text(), "");
    }
}

#[test]
fn missing_field_is_checked_before_email_shape() {
    let mut form = filled("", "not-an-email", "Hi");
    assert_eq!(form.submit(), Err(ValidationError::MissingField));
}

// =============================================================
// Bad email
// =============================================================

#[test]
fn malformed_email_yields_bad_email() {
    for email in ["bob@", "bob.com"] {
        let mut form = filled("Bob", email, "Hi");
        assert_eq!(form.submit(), Err(ValidationError::BadEmail));
        assert_eq!(form.record.email, email);
        assert_eq!(form.status.error_text(), "Please provide a valid email address.");
    }
}

#[test]
fn conforming_email_passes() {
    let mut form = filled("Bob", "bob@example.com", "Hi");
    assert!(form.submit().is_ok());
}

// =============================================================
// Success and notice lifecycle
// =============================================================

#[test]
fn valid_submission_clears_fields_and_sets_success() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();
    assert_eq!(form.record, ContactRecord::default());
    assert_eq!(form.status, FormStatus::Success);
    assert_eq!(form.status.success_text(), SUCCESS_MESSAGE);
    assert_eq!(form.status.error_text(), "");
    assert_eq!(form.pending_notice(), Some(ticket));
}

#[test]
fn success_notice_clears_after_delay() {
    assert_eq!(SUCCESS_CLEAR_DELAY, Duration::from_millis(6000));

    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();
    assert!(form.expire_notice(ticket));
    assert_eq!(form.status, FormStatus::Idle);
    assert_eq!(form.status.success_text(), "");
    assert!(form.pending_notice().is_none());
}

#[test]
fn later_submission_supersedes_earlier_ticket() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let first = form.submit().unwrap();

    form.edit(ContactField::Name, "Ada".to_owned());
    form.edit(ContactField::Email, "ada@example.com".to_owned());
    form.edit(ContactField::Message, "Again".to_owned());
    let second = form.submit().unwrap();
    assert_ne!(first, second);

    assert!(!form.expire_notice(first));
    assert_eq!(form.status, FormStatus::Success);
    assert!(form.expire_notice(second));
    assert_eq!(form.status, FormStatus::Idle);
}

#[test]
fn failed_submission_clears_success_and_voids_ticket() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();

    assert_eq!(form.submit(), Err(ValidationError::MissingField));
    assert_eq!(form.status.success_text(), "");
    assert!(!form.expire_notice(ticket));
    assert_eq!(form.status, FormStatus::Error(ValidationError::MissingField));
}

#[test]
fn expiring_twice_is_a_noop() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();
    assert!(form.expire_notice(ticket));
    assert!(!form.expire_notice(ticket));
}

#[test]
fn cancel_notice_keeps_message_but_voids_ticket() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();
    form.cancel_notice();
    assert!(!form.expire_notice(ticket));
    assert_eq!(form.status, FormStatus::Success);
}

#[test]
fn editing_after_success_keeps_notice() {
    let mut form = filled("Ada", "ada@example.com", "Hi");
    let ticket = form.submit().unwrap();
    form.edit(ContactField::Name, "Grace".to_owned());
    assert_eq!(form.status, FormStatus::Success);
    assert!(form.expire_notice(ticket));
}
