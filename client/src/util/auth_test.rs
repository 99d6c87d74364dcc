use super::*;
use crate::net::types::UserProfile;

fn sample_user() -> UserProfile {
    UserProfile {
        id: 1,
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        first_name: None,
        last_name: None,
        is_active: true,
    }
}

#[test]
fn should_redirect_when_signed_out() {
    assert!(should_redirect_unauth(&SessionState::Idle));
}

#[test]
fn should_redirect_when_session_failed() {
    assert!(should_redirect_unauth(&SessionState::Failed("nope".to_owned())));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::Loading));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(&SessionState::Authenticated(sample_user())));
}
