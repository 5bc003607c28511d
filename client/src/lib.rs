//! # client
//!
//! Leptos + WASM login form for the storefront.
//!
//! The page validates username and password, exchanges them for a session
//! token at the authentication backend, stores the session in `localStorage`
//! or `sessionStorage` depending on "remember me", and then follows the
//! `next` query parameter. It also starts the QQ OAuth handoff.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
