//! # client
//!
//! Leptos + WASM frontend for the Gridline configurable data grid: fetches
//! records from an HTTP endpoint and renders them as a desktop table or a
//! mobile card list, with column definitions editable at runtime.
//!
//! This crate contains pages, components, application state, the record
//! fetch client, and browser utilities (viewport tracking, dark mode).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
