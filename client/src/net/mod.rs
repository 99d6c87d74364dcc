//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` classifies their failures, and
//! `types` re-exports the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
