//! # client
//!
//! Leptos + WASM front end for the homepage widget set: a live clock, a
//! single-month calendar, a persisted light/dark theme toggle and a
//! collapsible navigation menu.
//!
//! Rendering is split between pure helpers in `util` (month grids, date
//! formatting, theme resolution) and thin components that bind those helpers
//! to the DOM. Browser-only glue is gated behind the `hydrate` feature so the
//! same components render on the server under `ssr`.

pub mod app;
pub mod components;
pub mod pages;
pub mod settings;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
