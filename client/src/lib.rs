//! # client
//!
//! Leptos + WASM frontend for the postboard blog.
//!
//! Pages, dialogs and the toaster live here; request building, status
//! classification and view state come from the `contract` crate. This crate
//! only adds the browser pieces: a `gloo-net` transport, `localStorage`
//! session storage and the reactive wiring between them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
