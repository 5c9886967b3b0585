use std::sync::Mutex;

use futures::executor::block_on;
use school_portal::SessionStore;

use super::*;

// =============================================================================
// Response mapping
// =============================================================================

#[test]
fn me_200_parses_identity() {
    let body = r#"{"uid":"g-1","email":"sahin401099@gmail.com","display_name":"Sahin"}"#;
    let identity = identity_from_response(200, body).unwrap().unwrap();
    assert_eq!(identity.uid, "g-1");
    assert_eq!(identity.email.as_deref(), Some("sahin401099@gmail.com"));
    assert_eq!(identity.display_name.as_deref(), Some("Sahin"));
}

#[test]
fn me_401_means_signed_out() {
    assert_eq!(identity_from_response(401, ""), Ok(None));
    assert_eq!(identity_from_response(204, ""), Ok(None));
}

#[test]
fn me_malformed_body_is_provider_error() {
    let err = identity_from_response(200, "not json").unwrap_err();
    assert!(matches!(err, AuthError::Provider { ref code, .. } if code == "invalid_response"));
}

#[test]
fn me_server_error_carries_status() {
    let err = identity_from_response(503, "").unwrap_err();
    assert_eq!(
        err,
        AuthError::Provider { code: "http_503".to_owned(), message: "session check failed: 503".to_owned() }
    );
    assert!(err.is_retryable());
}

#[test]
fn logout_accepts_success_and_missing_session() {
    assert_eq!(sign_out_result(200), Ok(()));
    assert_eq!(sign_out_result(204), Ok(()));
    assert_eq!(sign_out_result(401), Ok(()));
    assert!(sign_out_result(500).is_err());
}

// =============================================================================
// Provider behavior outside the browser
// =============================================================================

#[test]
fn first_listener_gets_signed_out_push() {
    let provider = HttpIdentityProvider::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in = Arc::clone(&seen);

    let _subscription = provider.on_identity_changed(Arc::new(move |identity| {
        seen_in.lock().unwrap().push(identity);
    }));

    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert_eq!(provider.current_identity(), None);
}

#[test]
fn late_listener_gets_resolved_state_once() {
    let provider = HttpIdentityProvider::new();
    let _first = provider.on_identity_changed(Arc::new(|_| {}));

    let seen = Arc::new(Mutex::new(0));
    let seen_in = Arc::clone(&seen);
    let _second = provider.on_identity_changed(Arc::new(move |_| *seen_in.lock().unwrap() += 1));

    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn session_store_resolves_to_signed_out() {
    let store = SessionStore::new(Arc::new(HttpIdentityProvider::new()));
    let snapshot = store.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.identity.is_none());
}

#[test]
fn interactive_sign_in_is_unavailable_without_browser() {
    let store = SessionStore::new(Arc::new(HttpIdentityProvider::new()));
    let err = block_on(store.sign_in_interactive()).unwrap_err();
    assert!(matches!(err, AuthError::ProviderUnavailable(_)));
    assert_eq!(store.snapshot().error, Some(err));
}

#[test]
fn sign_out_succeeds_when_signed_out() {
    let provider = HttpIdentityProvider::new();
    assert_eq!(block_on(provider.sign_out()), Ok(()));
    assert_eq!(block_on(provider.sign_out()), Ok(()));
}
