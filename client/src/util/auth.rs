//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes should apply identical unauthenticated redirect
//! behavior, and the decision has to wait out the initial restore.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// Whether a protected page should bounce to `/login`.
///
/// `Loading` never redirects: the restore still owns the verdict. A
/// `Failed` session has no user to show either, so it redirects too.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    matches!(state, SessionState::Idle | SessionState::Failed(_))
}

/// Redirect to `/login` whenever the session settles without a user.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
