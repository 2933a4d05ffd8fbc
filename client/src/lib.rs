//! # client
//!
//! Leptos frontend for the themed blog. Renders on the server through
//! `leptos_axum` and hydrates in the browser.
//!
//! This crate contains the root shell, the theme context, the theme toggle
//! controls, the blog page and the browser glue for observing the OS color
//! scheme. Theme validation and precedence come from the `themes` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
