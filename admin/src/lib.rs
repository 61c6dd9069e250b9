//! # admin
//!
//! Leptos + WASM admin console for the exam-prep portal.
//!
//! The console is a thin layer over the ingestion backend: it lists document
//! extraction folders and their chunks, uploads PDFs and exam papers, drives
//! embedding creation, and runs retrieval queries. Everything that can be
//! decided without a browser lives in `state` and `util` so it is covered by
//! plain unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
