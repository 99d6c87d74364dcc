//! Failure classification for REST calls.

/// Error returned by the helpers in [`crate::net::api`].
///
/// Variants carry user-presentable detail strings extracted from backend
/// `{"detail": ...}` bodies where available, so pages can show them without
/// further mapping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token is stored, or the backend rejected the one presented.
    #[error("not authenticated")]
    Unauthenticated,
    /// Login was refused. The payload is the message to show on the form.
    #[error("{0}")]
    InvalidCredentials(String),
    /// The backend answered with a non-success status other than a login
    /// or token rejection.
    #[error("{0}")]
    Api(String),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Message suitable for display in a page banner.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
