//! # client
//!
//! Leptos + WASM frontend for the landing site.
//!
//! This crate contains the page, its components, the theme and feed state
//! models, and the browser glue that applies them. Pure logic (theme choice,
//! feed parsing, card modelling) compiles and tests natively; everything that
//! touches `web-sys` is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
