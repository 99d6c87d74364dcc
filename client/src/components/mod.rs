//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome shared across routes while pages own the
//! session-driven behavior.

pub mod starfield;
