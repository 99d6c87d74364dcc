use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-1"), "Bearer tok-1");
}

#[test]
fn stored_bearer_requires_a_token_before_any_network_call() {
    token::clear();
    assert_eq!(stored_bearer(), Err(ApiError::Unauthenticated));
}

#[test]
fn stored_bearer_uses_stored_token() {
    token::set("tok-2");
    assert_eq!(stored_bearer(), Ok("Bearer tok-2".to_owned()));
    token::clear();
}

#[test]
fn handle_unauthorized_clears_token_on_401() {
    token::set("doomed");
    assert!(handle_unauthorized(401));
    assert_eq!(token::get(), None);
}

#[test]
fn handle_unauthorized_ignores_other_statuses() {
    token::set("kept");
    assert!(!handle_unauthorized(403));
    assert!(!handle_unauthorized(500));
    assert_eq!(token::get().as_deref(), Some("kept"));
    token::clear();
}

#[test]
fn error_detail_prefers_backend_detail() {
    let body = r#"{"detail": "Incorrect username or password"}"#;
    assert_eq!(error_detail(body, LOGIN_FALLBACK), "Incorrect username or password");
}

#[test]
fn error_detail_falls_back_when_body_is_unusable() {
    assert_eq!(error_detail("<html>bad gateway</html>", LOGIN_FALLBACK), LOGIN_FALLBACK);
    assert_eq!(error_detail(r#"{"detail": ""}"#, UPDATE_FALLBACK), UPDATE_FALLBACK);
    assert_eq!(error_detail("", REGISTER_FALLBACK), REGISTER_FALLBACK);
}

#[test]
fn profile_request_failed_message_formats_status() {
    assert_eq!(profile_request_failed_message(500), "profile request failed: 500");
}
