use super::*;

#[test]
fn cancelled_sign_in_is_neutral() {
    let message = InlineMessage::from_error(&AuthError::UserCancelled);
    assert_eq!(message.class, "login-message");
    assert_eq!(message.text, "Sign-in was cancelled. You can try again.");
}

#[test]
fn unreachable_provider_is_error_styled() {
    let message = InlineMessage::from_error(&AuthError::ProviderUnavailable("offline".to_owned()));
    assert_eq!(message.class, "login-message login-message--error");
}

#[test]
fn unauthorized_identity_is_fatal_styled() {
    assert_eq!(
        InlineMessage::from_error(&AuthError::UnauthorizedIdentity).class,
        "login-message login-message--error login-message--fatal"
    );
}

#[test]
fn continue_hint_names_return_to() {
    let location = Location::parse("/admin/login?next=%2Fadmin%2Fnotices%2Fedit%2F42");
    assert_eq!(continue_hint(&location).as_deref(), Some("Sign in to continue to /admin/notices/edit/42."));
}

#[test]
fn continue_hint_ignores_missing_or_hostile_next() {
    assert_eq!(continue_hint(&Location::parse("/admin/login")), None);
    assert_eq!(continue_hint(&Location::parse("/admin/login?next=%2F%2Fevil.example")), None);
}
