//! Show/hide toggles for translation and transliteration lines.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Toggle button id and the elements it reveals.
pub const REVEAL_TOGGLES: [(&str, &str); 2] = [
    ("translationToggle", ".container .translation"),
    ("transliterationToggle", ".container .transliteration"),
];

/// Next inline `display` value. Hidden or unset lines become visible.
pub fn toggled_display(current: &str) -> &'static str {
    match current.trim() {
        "" | "none" => "block",
        _ => "none",
    }
}

/// Wire each toggle button that exists on the page.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        use super::dom;

        for (button_id, selector) in REVEAL_TOGGLES {
            let Some(button) = dom::element_by_id(button_id) else {
                continue;
            };
            dom::listen(&button, "click", move |_| {
                for el in dom::query_all(selector) {
                    let current = el.style().get_property_value("display").unwrap_or_default();
                    dom::set_style(&el, "display", toggled_display(&current));
                }
            });
        }
    }
}
