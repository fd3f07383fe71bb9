//! Poem paragraph sizing and alternate line colouring.
//!
//! Applies the current font size to every `.container p` and recolours
//! `.container p.alt` lines for the active theme. Both run from one effect so
//! a theme change and a size change leave the paragraphs consistent.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
const PARAGRAPH_SELECTOR: &str = ".container p";
#[cfg(feature = "csr")]
const ALT_LINE_CLASS: &str = "alt";

/// Push a font size and alternate-line colour onto the poem paragraphs.
pub fn apply(font_css: &str, alt_colour: &str) {
    #[cfg(feature = "csr")]
    {
        use super::dom;

        for p in dom::query_all(PARAGRAPH_SELECTOR) {
            dom::set_style(&p, "font-size", font_css);
            if p.class_list().contains(ALT_LINE_CLASS) {
                dom::set_style(&p, "color", alt_colour);
            } else {
                let _ = p.style().remove_property("color");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (font_css, alt_colour);
    }
}

/// Keep the paragraphs in sync with the UI signal.
pub fn install(ui: RwSignal<UiState>) {
    Effect::new(move || {
        let (font_css, alt_colour) = ui.with(|u| (u.font_css(), u.alt_line_colour()));
        apply(&font_css, alt_colour);
    });
}
