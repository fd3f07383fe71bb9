//! Hamburger navigation pane and share menu.
//!
//! Each menu needs both its button and its panel on the page. A button click
//! toggles its panel; any other click on the document closes open panels;
//! clicks inside a panel stay inside it.

#[cfg(test)]
#[path = "menus_test.rs"]
mod menus_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
const NAV_OPEN_CLASS: &str = "show";

/// Inline `display` for the share menu.
pub fn share_display(open: bool) -> &'static str {
    if open { "block" } else { "none" }
}

/// Wire whichever menus exist on the page.
pub fn install(ui: RwSignal<UiState>) {
    #[cfg(feature = "csr")]
    {
        use super::dom;

        let nav = dom::element_by_id("hamburgerButton").zip(dom::element_by_id("navPane"));
        let share = dom::element_by_id("shareButton").zip(dom::element_by_id("shareMenu"));
        if nav.is_none() && share.is_none() {
            return;
        }

        if let Some((button, pane)) = nav {
            dom::listen(&button, "click", move |ev| {
                ev.stop_propagation();
                ui.update(UiState::toggle_nav);
            });
            dom::listen(&pane, "click", |ev| ev.stop_propagation());
            Effect::new(move || {
                let open = ui.with(|u| u.nav_open);
                let _ = pane.class_list().toggle_with_force(NAV_OPEN_CLASS, open);
            });
        }

        if let Some((button, menu)) = share {
            dom::listen(&button, "click", move |ev| {
                ev.stop_propagation();
                ui.update(UiState::toggle_share);
            });
            dom::listen(&menu, "click", |ev| ev.stop_propagation());
            Effect::new(move || {
                let open = ui.with(|u| u.share_open);
                dom::set_style(&menu, "display", share_display(open));
            });
        }

        if let Some(doc) = dom::document() {
            dom::listen(&doc, "click", move |_| ui.update(UiState::close_menus));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ui;
    }
}
