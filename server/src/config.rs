//! Proxy configuration parsed from environment variables.

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the FitFusion backend, without a trailing slash.
    pub backend_url: String,
    /// Port this server listens on.
    pub port: u16,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `FITFUSION_API_URL`: backend base URL, default `http://localhost:8000`
    /// - `PORT`: listen port, default 3000
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url = std::env::var("FITFUSION_API_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let port = env_parse_u16("PORT", DEFAULT_PORT);

        Self { backend_url, port }
    }

    /// Upstream endpoint the registration gateway posts new accounts to.
    #[must_use]
    pub fn user_create_url(&self) -> String {
        format!("{}/api/v1/users/", self.backend_url)
    }

    /// Upstream URL for a relayed `/api/{path}` request, with the original
    /// query string reattached when one was present.
    #[must_use]
    pub fn relay_url(&self, path: &str, query: Option<&str>) -> String {
        let base = &self.backend_url;
        match query {
            Some(query) if !query.is_empty() => format!("{base}/api/{path}?{query}"),
            _ => format!("{base}/api/{path}"),
        }
    }
}

fn env_parse_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
