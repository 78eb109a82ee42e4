//! # portfolio-ui
//!
//! Leptos + WASM frontend for a single-page personal portfolio site.
//! Replaces four near-duplicate page scripts with one canonical
//! implementation whose optional extras (preloader, stat counters,
//! typing subtitle) are configuration, not separate code paths.
//!
//! This crate contains the page, components, application state, the
//! contact-form network call, and the pure animation/scroll helpers.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
