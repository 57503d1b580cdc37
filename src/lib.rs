//! # recetapps
//!
//! Leptos + WASM recipe finder. Searches TheMealDB by name, renders results as
//! cards, and keeps favorites, search history, and achievements in browser
//! `localStorage`.
//!
//! The persisted state lives in [`state`] and is plain Rust with no browser
//! dependency, so it is tested natively. [`net`] talks to the recipe API.
//! [`app`], [`pages`], and [`components`] are the view layer. With the `ssr`
//! feature, `server` renders the app under Axum and the `recetapps` binary
//! serves it; the `hydrate` build attaches to that markup in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
