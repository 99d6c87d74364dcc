//! Wire schema used on the client side of the REST boundary.
//!
//! The shapes live in the shared `wire` crate so the relay in `server` and
//! this client agree on them by construction. This module re-exports the
//! ones the UI touches.

pub use wire::{ErrorBody, ProfileUpdate, RegisterRequest, TokenResponse, UserProfile};
