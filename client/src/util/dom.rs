//! Thin `web-sys` helpers shared by the page behaviors.
//!
//! Every lookup returns `Option` so callers can skip a behavior when its
//! element is missing from the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// All elements matching `selector`. Invalid selectors yield nothing.
pub fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Origin of the current page, e.g. `https://poems.example`.
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

/// Set one inline style property, ignoring failures.
pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
