//! Registration gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts new accounts to `/api/register` on its own origin. This
//! handler forwards the payload to the backend's user-create endpoint and
//! relays the verdict: the created user on success, or the backend's error
//! body under its original status so the form can tell a duplicate email
//! (400/409) from a backend outage (500). Passwords are redacted before any
//! payload reaches the logs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wire::ErrorBody;

use crate::state::AppState;

/// Failure between this gateway and the backend. A backend *rejection* is not
/// an error here; rejections relay with their original status.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend could not be reached at all.
    #[error("{0}")]
    Unreachable(reqwest::Error),
    /// The backend accepted the registration but its body could not be read.
    #[error("unreadable backend response: {0}")]
    UnreadableBody(reqwest::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "registration gateway failed");
        let body = ErrorBody::server_error(&self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `POST /api/register` — forward a registration to the backend user-create
/// endpoint and relay its response.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let url = state.config.user_create_url();
    tracing::info!(%url, payload = %wire::redacted(&payload), "registration received");

    let response = state
        .http
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(GatewayError::Unreachable)?;

    let status = response.status();
    if !status.is_success() {
        // Relay the backend's error body verbatim; one that fails to parse
        // degrades to a generic detail under the same status.
        let body: serde_json::Value = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!(ErrorBody::unknown()));
        tracing::warn!(%status, "backend rejected registration");
        return Ok((status, Json(body)).into_response());
    }

    let created: serde_json::Value = response.json().await.map_err(GatewayError::UnreadableBody)?;
    tracing::info!("registration succeeded");
    Ok(Json(created).into_response())
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
