//! # portfolio
//!
//! Leptos + WASM frontend for a single-page personal portfolio: hero,
//! project gallery, and a locally validated contact form, with a light/dark
//! theme persisted in `localStorage`.
//!
//! The crate is rendered on the server with the `ssr` feature and hydrated in
//! the browser with the `hydrate` feature. Without either feature only the
//! browser-free state and content modules do real work, which is what the unit
//! tests exercise.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
