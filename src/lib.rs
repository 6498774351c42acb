//! # websocket-app
//!
//! Leptos + WASM browser client for a minimal WebSocket greeting exchange.
//! The app connects to the hosting server's websocket endpoint on demand,
//! sends a fixed greeting, and appends every notification the server pushes
//! to a read-only display list.
//!
//! This crate contains the app shell, UI components, application state,
//! wire types, and the websocket client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Entry point for the browser bundle; hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
