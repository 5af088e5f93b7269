//! # diary
//!
//! Leptos + WASM front-end shell for the diary journaling app.
//!
//! This crate wires the browser-independent `gate` services (session, modal
//! stack, access policy) into the UI: it provides them through context,
//! adapts `localStorage`, timers, and the router to `gate`'s traits, and
//! renders the modal host, the page access guard, and the layout chrome.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
