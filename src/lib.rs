//! # agora-client
//!
//! Leptos + WASM frontend for the Agora community boards.
//!
//! The crate centers on the client-side session lifecycle: credentials and
//! expiry live in browser storage, a scheduled timer signs the user out the
//! moment the session deadline passes, and two guards (route-level and
//! action-level) gate member-only surfaces against the same session check.
//! Pages, chrome, and the auth API boundary are deliberately thin around
//! that core.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point. Seeds harness flags, then hydrates the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::test_bypass::sync_from_window();
    leptos::mount::hydrate_body(app::App);
}
