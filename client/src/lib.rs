//! # poetry-client
//!
//! Leptos + WASM behavior layer for the static poetry site.
//!
//! Pages are plain HTML. This crate enhances them in place: font sizing,
//! dark mode, the navigation and share menus, translation toggles, and the
//! searchable poem directory. Every behavior looks up its own elements and
//! silently skips itself when they are absent.
//!
//! Decision logic lives in `state` and `net` and compiles natively so it can
//! be unit tested. Browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point: install the panic hook, then every page behavior.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::mount();
}

/// Step the page font size by `delta` increments of 0.1rem.
///
/// Exported for inline `onclick="changeFontSize(1)"` handlers in the static
/// pages.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = changeFontSize)]
pub fn change_font_size(delta: f64) {
    app::change_font_size(delta);
}
