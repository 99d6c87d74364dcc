use super::*;

fn sample_profile() -> UserProfile {
    UserProfile {
        id: 7,
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        is_active: true,
    }
}

#[test]
fn user_profile_round_trips_through_json() {
    let profile = sample_profile();
    let json = serde_json::to_string(&profile).expect("serialize");
    let restored: UserProfile = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, profile);
}

#[test]
fn user_profile_ignores_unknown_backend_fields() {
    let json = r#"{
        "id": 3,
        "email": "kay@example.com",
        "username": "kay",
        "first_name": null,
        "last_name": null,
        "is_active": true,
        "is_verified": false,
        "is_superuser": false,
        "created_at": "2025-01-01T00:00:00Z",
        "roles": []
    }"#;
    let profile: UserProfile = serde_json::from_str(json).expect("deserialize");
    assert_eq!(profile.id, 3);
    assert_eq!(profile.username, "kay");
    assert!(profile.first_name.is_none());
    assert!(profile.is_active);
}

#[test]
fn user_profile_missing_active_flag_defaults_inactive() {
    let json = r#"{"id": 1, "email": "a@b.c", "username": "a"}"#;
    let profile: UserProfile = serde_json::from_str(json).expect("deserialize");
    assert!(!profile.is_active);
}

#[test]
fn token_response_defaults_optional_fields() {
    let json = r#"{"access_token": "tok-1"}"#;
    let token: TokenResponse = serde_json::from_str(json).expect("deserialize");
    assert_eq!(token.access_token, "tok-1");
    assert_eq!(token.token_type, "bearer");
    assert!(token.refresh_token.is_none());
    assert!(token.expires_at.is_none());
}

#[test]
fn token_response_keeps_issued_fields() {
    let json = r#"{
        "access_token": "tok-2",
        "token_type": "bearer",
        "refresh_token": "ref-2",
        "expires_at": "2025-06-01T12:00:00Z"
    }"#;
    let token: TokenResponse = serde_json::from_str(json).expect("deserialize");
    assert_eq!(token.refresh_token.as_deref(), Some("ref-2"));
    assert_eq!(token.expires_at.as_deref(), Some("2025-06-01T12:00:00Z"));
}

#[test]
fn profile_update_omits_unset_fields() {
    let update = ProfileUpdate { email: Some("new@example.com".to_owned()), ..ProfileUpdate::default() };
    let json = serde_json::to_value(&update).expect("serialize");
    assert_eq!(json, serde_json::json!({"email": "new@example.com"}));
}

#[test]
fn empty_profile_update_serializes_to_empty_object() {
    let json = serde_json::to_value(ProfileUpdate::default()).expect("serialize");
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn error_body_server_error_formats_message() {
    let body = ErrorBody::server_error("connection refused");
    assert_eq!(body.detail, "Server error: connection refused");
}

#[test]
fn error_body_unknown_matches_proxy_fallback() {
    assert_eq!(ErrorBody::unknown().detail, "Unknown error");
}

#[test]
fn detail_from_json_extracts_message() {
    let detail = detail_from_json(r#"{"detail": "A user with this email already exists in the system."}"#);
    assert_eq!(detail.as_deref(), Some("A user with this email already exists in the system."));
}

#[test]
fn detail_from_json_rejects_missing_or_empty_detail() {
    assert_eq!(detail_from_json(r#"{"detail": ""}"#), None);
    assert_eq!(detail_from_json(r#"{"other": "x"}"#), None);
    assert_eq!(detail_from_json("not json"), None);
}

#[test]
fn redact_replaces_top_level_password() {
    let logged = redacted(&serde_json::json!({
        "username": "ada",
        "password": "Sup3r$ecret"
    }));
    assert_eq!(logged["password"], REDACTED);
    assert_eq!(logged["username"], "ada");
}

#[test]
fn redact_recurses_into_nested_objects_and_arrays() {
    let logged = redacted(&serde_json::json!({
        "user": {"password": "inner"},
        "batch": [{"password": "a"}, {"password": "b"}]
    }));
    assert_eq!(logged["user"]["password"], REDACTED);
    assert_eq!(logged["batch"][0]["password"], REDACTED);
    assert_eq!(logged["batch"][1]["password"], REDACTED);
}

#[test]
fn redact_never_leaks_the_original_value() {
    let logged = redacted(&serde_json::json!({
        "password": "Sup3r$ecret",
        "profile": {"password": "N3sted$ecret"}
    }));
    let rendered = logged.to_string();
    assert!(!rendered.contains("Sup3r$ecret"));
    assert!(!rendered.contains("N3sted$ecret"));
}

#[test]
fn redact_leaves_similarly_named_fields_alone() {
    let logged = redacted(&serde_json::json!({
        "password_hint": "pet name",
        "old_password_set": true
    }));
    assert_eq!(logged["password_hint"], "pet name");
    assert_eq!(logged["old_password_set"], true);
}

#[test]
fn redact_passes_scalars_through() {
    let mut value = serde_json::json!("password");
    redact_passwords(&mut value);
    assert_eq!(value, serde_json::json!("password"));
}

#[test]
fn register_request_serializes_all_fields() {
    let request = RegisterRequest {
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        password: "Sup3r$ecret".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: String::new(),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["last_name"], "");
    assert_eq!(json["password"], "Sup3r$ecret");
}
