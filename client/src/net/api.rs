//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns [`ApiError`] with a user-presentable message pulled
//! from the backend `{"detail": ...}` body when one exists. A 401 from a
//! token-authenticated endpoint clears the stored token and sends the
//! browser back to the login page before the caller sees the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ProfileUpdate, RegisterRequest, TokenResponse, UserProfile};
use crate::util::token;

/// OAuth2 password-grant login endpoint, relayed to the backend.
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
/// Profile endpoint for the authenticated user (GET to read, PUT to update).
#[cfg(feature = "hydrate")]
const CURRENT_USER_ENDPOINT: &str = "/api/v1/users/me";
/// Registration gateway handled by `server` itself rather than relayed.
#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/api/register";
/// Where a rejected token sends the browser.
#[cfg(feature = "hydrate")]
const LOGIN_PATH: &str = "/login";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FALLBACK: &str = "Registration failed";
#[cfg(any(test, feature = "hydrate"))]
const UPDATE_FALLBACK: &str = "Failed to update profile";

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Authorization header value from the stored token, or `Unauthenticated`
/// before any network traffic happens.
fn stored_bearer() -> Result<String, ApiError> {
    token::get().map(|t| bearer_header(&t)).ok_or(ApiError::Unauthenticated)
}

/// Message shown when an error response carries no usable `detail`.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str, fallback: &str) -> String {
    wire::detail_from_json(body).unwrap_or_else(|| fallback.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_request_failed_message(status: u16) -> String {
    format!("profile request failed: {status}")
}

/// React to a 401 from a token-authenticated endpoint: drop the stored
/// token and navigate to the login page. Returns whether it fired.
#[cfg(any(test, feature = "hydrate"))]
fn handle_unauthorized(status: u16) -> bool {
    if status != 401 {
        return false;
    }
    token::clear();
    redirect_to_login();
    true
}

#[cfg(any(test, feature = "hydrate"))]
fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

#[cfg(feature = "hydrate")]
fn log_api_request(method: &str, url: &str) {
    log::debug!("api request: method={method} url={url}");
}

#[cfg(feature = "hydrate")]
fn log_api_response(method: &str, url: &str, status: u16) {
    log::debug!("api response: method={method} url={url} status={status}");
}

#[cfg(feature = "hydrate")]
fn log_api_error(method: &str, url: &str, status: u16, body: &str) {
    log::error!("api error: method={method} url={url} status={status} body={body}");
}

/// Exchange credentials for a bearer token via `POST /api/v1/auth/login`.
///
/// The backend speaks the OAuth2 password grant, so credentials go out as
/// `application/x-www-form-urlencoded` fields rather than JSON.
///
/// # Errors
///
/// `InvalidCredentials` on a 401, `Api` on other error statuses, and
/// `Transport` when no HTTP response was produced.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Transport("failed to build login form".to_owned()))?;
        params.append("username", username);
        params.append("password", password);
        let form = String::from(params.to_string());

        // The form body itself is never logged.
        log_api_request("POST", LOGIN_ENDPOINT);
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log_api_response("POST", LOGIN_ENDPOINT, resp.status());
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log_api_error("POST", LOGIN_ENDPOINT, status, &body);
            let detail = error_detail(&body, LOGIN_FALLBACK);
            if status == 401 {
                return Err(ApiError::InvalidCredentials(detail));
            }
            return Err(ApiError::Api(detail));
        }
        resp.json::<TokenResponse>().await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via the `POST /api/register` gateway.
///
/// Returns the created profile on success. The gateway forwards the backend
/// `detail` on failure, so the error message is already user-facing.
///
/// # Errors
///
/// `Api` with the backend detail (or a generic fallback), or `Transport`
/// when no HTTP response was produced.
pub async fn register(request: &RegisterRequest) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        log_api_request("POST", REGISTER_ENDPOINT);
        if let Ok(value) = serde_json::to_value(request) {
            log::debug!("sending registration: {}", wire::redacted(&value));
        }
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log_api_response("POST", REGISTER_ENDPOINT, resp.status());
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log_api_error("POST", REGISTER_ENDPOINT, status, &body);
            return Err(ApiError::Api(error_detail(&body, REGISTER_FALLBACK)));
        }
        resp.json::<UserProfile>().await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user's profile via `GET /api/v1/users/me`.
///
/// # Errors
///
/// `Unauthenticated` before any network call when no token is stored, and
/// again if the backend rejects the token (which also clears it and
/// redirects to the login page).
pub async fn fetch_current_user() -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let auth = stored_bearer()?;
        log_api_request("GET", CURRENT_USER_ENDPOINT);
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log_api_response("GET", CURRENT_USER_ENDPOINT, resp.status());
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log_api_error("GET", CURRENT_USER_ENDPOINT, status, &body);
            if handle_unauthorized(status) {
                return Err(ApiError::Unauthenticated);
            }
            return Err(ApiError::Api(error_detail(&body, &profile_request_failed_message(status))));
        }
        resp.json::<UserProfile>().await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored_bearer()?;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Update the authenticated user's profile via `PUT /api/v1/users/me`.
///
/// # Errors
///
/// Same contract as [`fetch_current_user`], plus the backend `detail` when
/// the update itself is rejected.
pub async fn update_profile(update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let auth = stored_bearer()?;
        log_api_request("PUT", CURRENT_USER_ENDPOINT);
        if let Ok(value) = serde_json::to_value(update) {
            log::debug!("sending profile update: {}", wire::redacted(&value));
        }
        let resp = gloo_net::http::Request::put(CURRENT_USER_ENDPOINT)
            .header("Authorization", &auth)
            .json(update)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        log_api_response("PUT", CURRENT_USER_ENDPOINT, resp.status());
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log_api_error("PUT", CURRENT_USER_ENDPOINT, status, &body);
            if handle_unauthorized(status) {
                return Err(ApiError::Unauthenticated);
            }
            return Err(ApiError::Api(error_detail(&body, UPDATE_FALLBACK)));
        }
        resp.json::<UserProfile>().await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (stored_bearer()?, update);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
