//! # client
//!
//! Leptos + WASM frontend for the Bake Assist customer chatbot.
//!
//! This crate contains the landing, customer-list and chat pages, their
//! presentational components, and the browser HTTP layer. Conversation and
//! listing state machines live in the shared `exchange` crate so the terminal
//! client follows the same rules.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
