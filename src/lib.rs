//! # wildlife-rating
//!
//! Leptos + WASM frontend for searching an animal-facts API, keeping a
//! favorites list, and rating favorite animals. Favorites and ratings live in
//! the browser's `localStorage`; there is no server.
//!
//! The state modules build and test natively. The `csr` feature adds the
//! browser bindings and the WASM entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
