//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the auth session, provided once at the app
//! root so every page observes the same lifecycle.

pub mod session;
