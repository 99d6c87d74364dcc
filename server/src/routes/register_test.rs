use axum::body::to_bytes;
use serde_json::json;

use super::*;
use crate::state::test_helpers;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should collect");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let state = test_helpers::unreachable_app_state();
    let payload = json!({
        "email": "new@example.com",
        "username": "newuser",
        "password": "Str0ng!pass",
        "first_name": "",
        "last_name": "",
    });

    let err = register(State(state), Json(payload)).await.expect_err("no backend is listening");
    assert!(matches!(err, GatewayError::Unreachable(_)));
}

#[tokio::test]
async fn transport_errors_answer_500_with_a_server_error_detail() {
    let state = test_helpers::unreachable_app_state();
    let payload = json!({ "email": "new@example.com", "username": "newuser", "password": "x" });

    let err = register(State(state), Json(payload)).await.expect_err("no backend is listening");
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().expect("detail should be a string");
    assert!(detail.starts_with("Server error: "), "got {detail:?}");
}

#[test]
fn degraded_error_body_matches_the_backend_envelope() {
    assert_eq!(serde_json::json!(ErrorBody::unknown()), json!({ "detail": "Unknown error" }));
}
