//! Dark mode initialization and toggle.
//!
//! Starts from the system `prefers-color-scheme` and applies the
//! `.dark-mode` class to `<body>`. When the page has a `#darkModeToggle`
//! button, system changes keep applying until the first click; after that
//! the user's choice wins for the rest of the session. Nothing is persisted.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
const DARK_MODE_CLASS: &str = "dark-mode";
#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the system currently prefers a dark color scheme.
pub fn read_system_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = super::dom::document().and_then(|d| d.body()) {
            let class_list = body.class_list();
            if enabled {
                let _ = class_list.add_1(DARK_MODE_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_MODE_CLASS);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Seed dark mode from the system and wire the page toggle, if present.
pub fn install(ui: RwSignal<UiState>) {
    ui.update(|u| u.follow_system(read_system_preference()));
    Effect::new(move || apply(ui.with(|u| u.dark_mode)));

    #[cfg(feature = "csr")]
    {
        use super::dom;
        use wasm_bindgen::JsCast;

        let Some(toggle) = dom::element_by_id("darkModeToggle") else {
            return;
        };

        if let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) {
            dom::listen(&mq, "change", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::MediaQueryListEvent>() {
                    ui.update(|u| u.follow_system(ev.matches()));
                }
            });
        }

        dom::listen(&toggle, "click", move |_| {
            ui.update(|u| {
                u.toggle_dark_mode();
            });
        });
    }
}
