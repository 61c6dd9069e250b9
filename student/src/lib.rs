//! # student
//!
//! Leptos + WASM student portal for ESLCE preparation.
//!
//! Students browse the bundled course catalog (course → unit → topic), take
//! short quizzes and a full-length exam simulator, ask the tutor chat about a
//! topic, and track progress. Quiz and catalog rules come from the `quiz` and
//! `curriculum` crates; this crate wires them to routes, signals, and browser
//! storage.

pub mod app;
pub mod components;
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
