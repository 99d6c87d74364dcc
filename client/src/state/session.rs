//! Auth-session lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] is created at the app root and provided via context.
//! Pages drive it through its operations (restore, login, register,
//! update, logout) and react to the [`SessionState`] it exposes. Route
//! guards and identity-dependent rendering all read the same signal.
//!
//! DESIGN
//! ======
//! Network outcomes funnel through pure `settle_*` functions so every
//! state transition is unit-testable without a browser. Operations always
//! settle: no code path leaves the session in `Loading` after its network
//! call resolves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ProfileUpdate, RegisterRequest, UserProfile};
use crate::util::token;

/// Friendly rewrite for backend email-conflict details.
const EMAIL_TAKEN: &str = "This email is already registered.";
/// Friendly rewrite for backend username-conflict details.
const USERNAME_TAKEN: &str = "This username is already taken.";

/// Where the auth session currently stands.
///
/// `Loading` covers both the initial restore on page load and any
/// in-flight operation, so pages can show one spinner for either.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    /// Restore or an operation is in flight.
    #[default]
    Loading,
    /// No authenticated user.
    Idle,
    /// Signed in as the carried profile.
    Authenticated(UserProfile),
    /// The last operation failed with a user-facing message.
    Failed(String),
}

impl SessionState {
    /// The signed-in profile, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The failure message, if the last operation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Handle to the shared auth session.
///
/// `Copy` so event handlers and spawned futures capture it by value; all
/// clones observe the same underlying signal.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session in the initial `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Reactive read of the current state.
    #[must_use]
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    /// Non-tracking read for event handlers.
    #[must_use]
    pub fn get_untracked(self) -> SessionState {
        self.state.get_untracked()
    }

    fn set(self, next: SessionState) {
        self.state.set(next);
    }

    /// Restore the session from a stored token at startup.
    ///
    /// No token means nothing to restore: the session settles in `Idle`
    /// without network traffic. With a token, the profile fetch decides.
    /// Any fetch failure drops the token and settles in `Idle` rather than
    /// `Failed`; a stale token is not an error worth a banner.
    pub async fn restore(self) {
        if token::get().is_none() {
            self.set(SessionState::Idle);
            return;
        }
        self.set(SessionState::Loading);
        let result = api::fetch_current_user().await;
        if result.is_err() {
            token::clear();
        }
        self.set(settle_restore(result));
    }

    /// Log in with a username (or email) and password.
    ///
    /// On success the issued token is stored and the profile fetched, so
    /// the session lands in `Authenticated`.
    ///
    /// # Errors
    ///
    /// Returns the message to show on the login form. The session also
    /// records it as `Failed`.
    pub async fn login(self, username: &str, password: &str) -> Result<(), String> {
        self.set(SessionState::Loading);
        let result = self.sign_in(username, password).await;
        let (next, outcome) = settle_login(result);
        self.set(next);
        outcome
    }

    /// Token exchange followed by the profile fetch.
    ///
    /// The token is stored as soon as it is issued and deliberately kept
    /// even if the follow-up profile fetch fails; a later restore can
    /// still redeem it.
    async fn sign_in(self, username: &str, password: &str) -> Result<UserProfile, ApiError> {
        let tokens = api::login(username, password).await?;
        token::set(&tokens.access_token);
        api::fetch_current_user().await
    }

    /// Create an account.
    ///
    /// Registration alone does not authenticate; on success the session
    /// settles in `Idle` and the caller follows up with [`Session::login`].
    ///
    /// # Errors
    ///
    /// Returns the message to show on the registration form, with backend
    /// conflict details rewritten into friendlier wording.
    pub async fn register(self, request: &RegisterRequest) -> Result<(), String> {
        self.set(SessionState::Loading);
        let result = api::register(request).await;
        let (next, outcome) = settle_register(&result);
        self.set(next);
        outcome
    }

    /// Update the signed-in user's profile.
    ///
    /// Success replaces the profile. Failure lands in `Failed` like every
    /// other operation, which a protected page treats as unauthenticated;
    /// a token rejection lands in `Idle` with the token already cleared.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the edit form.
    pub async fn update_profile(self, update: &ProfileUpdate) -> Result<UserProfile, String> {
        self.set(SessionState::Loading);
        let result = api::update_profile(update).await;
        let (next, outcome) = settle_update(result);
        self.set(next);
        outcome
    }

    /// Drop the stored token and return to `Idle`.
    pub fn logout(self) {
        token::clear();
        self.set(SessionState::Idle);
    }
}

fn settle_restore(result: Result<UserProfile, ApiError>) -> SessionState {
    match result {
        Ok(user) => SessionState::Authenticated(user),
        Err(_) => SessionState::Idle,
    }
}

fn settle_login(result: Result<UserProfile, ApiError>) -> (SessionState, Result<(), String>) {
    match result {
        Ok(user) => (SessionState::Authenticated(user), Ok(())),
        Err(error) => {
            let message = error.message();
            (SessionState::Failed(message.clone()), Err(message))
        }
    }
}

fn settle_register(result: &Result<UserProfile, ApiError>) -> (SessionState, Result<(), String>) {
    match result {
        Ok(_) => (SessionState::Idle, Ok(())),
        Err(error) => {
            let message = friendly_register_error(&error.message());
            (SessionState::Failed(message.clone()), Err(message))
        }
    }
}

fn settle_update(
    result: Result<UserProfile, ApiError>,
) -> (SessionState, Result<UserProfile, String>) {
    match result {
        Ok(user) => (SessionState::Authenticated(user.clone()), Ok(user)),
        Err(ApiError::Unauthenticated) => {
            (SessionState::Idle, Err(ApiError::Unauthenticated.message()))
        }
        Err(error) => {
            let message = error.message();
            (SessionState::Failed(message.clone()), Err(message))
        }
    }
}

/// Rewrite backend conflict details into the wording the forms show.
/// Anything unrecognized passes through untouched.
fn friendly_register_error(raw: &str) -> String {
    if raw.contains("email already exists") {
        EMAIL_TAKEN.to_owned()
    } else if raw.contains("username already exists") {
        USERNAME_TAKEN.to_owned()
    } else {
        raw.to_owned()
    }
}
