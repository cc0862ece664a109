//! # blog-reader
//!
//! Leptos + WASM single-page reader for a statically hosted blog.
//!
//! The crate fetches a JSON manifest of post summaries, renders them as a
//! date-ordered list of cards, and swaps to a single-post view on selection.
//! A light/dark theme preference is persisted in `localStorage`.
//!
//! Browser glue is compiled only with the `csr` feature. Without it every
//! DOM/network call degrades to a no-op so state machines and formatting
//! helpers can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install the panic hook and console logger, then mount [`app::App`] on
/// `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    leptos::mount::mount_to_body(app::App);
}
