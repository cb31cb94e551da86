//! # jobconnect-client
//!
//! Leptos + WASM frontend for the Job Connect job platform.
//!
//! This crate owns the client side of authentication: the persisted session
//! store, the API client that attaches the session's bearer credential to
//! every request, and the route guards that gate pages by sign-in state and
//! role. Pages are thin consumers of those pieces.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
