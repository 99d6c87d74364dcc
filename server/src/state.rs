//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The proxy keeps no session or request state of its own; everything a
//! handler needs is the backend location and an HTTP client. Connection
//! pooling lives inside `reqwest::Client`, so sharing one instance lets
//! relayed requests reuse upstream connections.

use crate::config::Config;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `Config` is a couple of strings and
/// `reqwest::Client` is an Arc around its pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Outbound client for the registration gateway and the API relay.
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, http: reqwest::Client::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` pointed at a port nothing listens on, so any forwarded
    /// request fails fast with a connect error.
    #[must_use]
    pub fn unreachable_app_state() -> AppState {
        AppState::new(Config { backend_url: "http://127.0.0.1:1".to_owned(), port: 0 })
    }
}
