//! Shared auth and profile contracts for the FitFusion client/server boundary.
//!
//! This crate owns the JSON shapes that cross the wire: the login token
//! response, the user profile, registration and profile-update payloads, and
//! the backend's `detail` error envelope. It also owns password redaction,
//! which both sides apply to any payload before logging it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker substituted for password values in logged payloads.
pub const REDACTED: &str = "[REDACTED]";

/// The authenticated user's profile as returned by `/api/v1/users/me`.
///
/// The backend attaches more fields (verification state, timestamps, roles);
/// only the ones the UI renders are kept, and extras are ignored on
/// deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: i64,
    /// Email address used for login and contact.
    pub email: String,
    /// Unique handle, also accepted as a login identifier.
    pub username: String,
    /// Given name, if provided at registration.
    pub first_name: Option<String>,
    /// Family name, if provided at registration.
    pub last_name: Option<String>,
    /// Whether the account is active; inactive accounts cannot sign in.
    #[serde(default)]
    pub is_active: bool,
}

/// Response of `POST /api/v1/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token attached to authenticated requests.
    pub access_token: String,
    /// Token scheme; the backend always issues `"bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Refresh token, when the backend issues one. Unused by this client.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access-token expiry as an ISO 8601 timestamp, if reported.
    #[serde(default)]
    pub expires_at: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Payload of `POST /api/register`, forwarded verbatim to the backend
/// user-create endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Optional given name; the form sends an empty string when left blank.
    pub first_name: String,
    /// Optional family name; the form sends an empty string when left blank.
    pub last_name: String,
}

/// Partial-update payload of `PUT /api/v1/users/me`.
///
/// Unset fields are omitted from the serialized body so the backend only
/// touches what the caller supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The backend's error envelope, also used for errors the proxy synthesizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[serde(default)]
    pub detail: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }

    /// Body for a proxy-side transport failure.
    #[must_use]
    pub fn server_error(message: &str) -> Self {
        Self::new(format!("Server error: {message}"))
    }

    /// Stand-in body when an upstream error response cannot be parsed.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new("Unknown error")
    }
}

/// Extract a non-empty `detail` message from a raw JSON error body.
#[must_use]
pub fn detail_from_json(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if parsed.detail.is_empty() {
        return None;
    }
    Some(parsed.detail)
}

/// Replace the value of every field named `password` with [`REDACTED`],
/// recursing through nested objects and arrays.
pub fn redact_passwords(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key == "password" {
                    *entry = Value::String(REDACTED.to_owned());
                } else {
                    redact_passwords(entry);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                redact_passwords(item);
            }
        }
        _ => {}
    }
}

/// Copy of `value` safe to log: every `password` field is replaced with
/// [`REDACTED`].
#[must_use]
pub fn redacted(value: &Value) -> Value {
    let mut copy = value.clone();
    redact_passwords(&mut copy);
    copy
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
