//! # client
//!
//! Leptos + WASM frontend for the FitFusion fitness application.
//!
//! This crate contains pages, components, the shared session state, and the
//! REST helpers used to talk to the FastAPI backend through the `server`
//! relay. It is compiled twice: to WASM with the `hydrate` feature for the
//! browser, and natively with the `ssr` feature when linked into `server`
//! for server-side rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
