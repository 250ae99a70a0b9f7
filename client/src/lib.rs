//! # client
//!
//! Leptos frontend for the house price prediction showcase. Server-rendered
//! by the root `housing-showcase` binary (`ssr` feature) and hydrated in the
//! browser from the WASM bundle (`hydrate` feature).
//!
//! Pages are static content; the interactive parts are the persisted theme
//! store, the theme switch, reveal-on-scroll counters and progress bars, and
//! the route-aware navigation bar.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
