//! # site-chrome
//!
//! Browser-side page chrome for server-rendered sites: a persisted light/dark
//! theme toggle and a mobile navigation menu toggle, compiled to WASM.
//!
//! The controllers are written against small document and storage traits
//! (`dom`, `store`) so they run unchanged in the browser (`hydrate` feature)
//! and natively in tests. Static pages get the behavior from [`start`]; Leptos
//! apps can render the `components` instead.

pub mod boot;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod store;
pub mod theme;

pub use config::ChromeConfig;
pub use error::ChromeError;
pub use theme::Theme;

/// Install the console logger and panic hook. Safe to call repeatedly.
///
/// Restores and binding outcomes log at `info`; per-click results log at
/// `debug` and stay hidden at this level.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Module entry point: enhance whatever chrome the current page contains.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging();

    let Some(document) = browser::BrowserDocument::current() else {
        return;
    };
    let config = ChromeConfig::from_document(&document).unwrap_or_else(|err| {
        log::warn!("using default chrome config: {err}");
        ChromeConfig::default()
    });
    let bindings = boot::attach(&config, &document, browser::LocalStorage);
    log::info!("chrome attached: {bindings:?}");
}
