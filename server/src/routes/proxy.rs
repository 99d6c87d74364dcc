//! Catch-all API relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/api/*` request other than registration lands here and is forwarded
//! to the backend unchanged: same method, path, query, body, content type,
//! and bearer token. The browser only ever talks to its own origin; this
//! handler is the rewrite rule that makes that work. Relayed bodies can carry
//! credentials and are never logged.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use wire::ErrorBody;

use crate::state::AppState;

/// Request headers the relay forwards upstream. Everything else (cookies,
/// hop-by-hop headers) stays behind.
const FORWARDED_REQUEST_HEADERS: [&str; 2] = ["authorization", "content-type"];

fn forwarded_headers(headers: &HeaderMap) -> Vec<(HeaderName, HeaderValue)> {
    FORWARDED_REQUEST_HEADERS
        .iter()
        .copied()
        .filter_map(|name| {
            let name = HeaderName::from_static(name);
            let value = headers.get(&name)?.clone();
            Some((name, value))
        })
        .collect()
}

/// `ANY /api/{*path}` — forward the request to the backend and relay its
/// status, body, and content type.
pub async fn relay(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = state.config.relay_url(&path, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    for (name, value) in forwarded_headers(&headers) {
        request = request.header(name, value);
    }

    let upstream = match request.body(body).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, %method, path, "relay to backend failed");
            return (StatusCode::BAD_GATEWAY, Json(ErrorBody::server_error(&e.to_string())))
                .into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let body = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, %method, path, "relay response unreadable");
            return (StatusCode::BAD_GATEWAY, Json(ErrorBody::server_error(&e.to_string())))
                .into_response();
        }
    };

    tracing::debug!(%method, path, %status, "relayed");

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
