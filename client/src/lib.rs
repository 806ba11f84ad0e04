//! # client
//!
//! Leptos + WASM frontend for the debt-tracking messaging tool.
//!
//! This crate contains the routed pages, view components, workflow state and
//! browser file helpers. Spreadsheet decoding itself lives in the `workbook`
//! crate so it can be tested natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
