//! # portfolio-client
//!
//! Leptos + WASM frontend for the single-page portfolio site.
//!
//! This crate contains the page, its section components, the interactive
//! state machines behind them (scroll tracking, typewriter, skill filter,
//! contact submission, theme), the static site content, and the browser-side
//! email relay client. The state machines are plain Rust with no browser
//! dependency; the `hydrate` feature wires them to timers and DOM events.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
