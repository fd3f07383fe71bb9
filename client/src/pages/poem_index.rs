//! Poem index: manifest load plus search and tag filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs only when the page has a `#poemList`. The search box
//! (`#searchInput`) and tag bar (`#tagFilterContainer`) are each optional.
//! Listeners are attached before the fetch resolves; early input filters the
//! still-empty collection until the load completes.

#[cfg(test)]
#[path = "poem_index_test.rs"]
mod poem_index_test;

use leptos::prelude::*;

use crate::net::manifest::{MANIFEST_URL, fetch_manifest};
use crate::state::directory::PoemDirectory;

/// Fetch the manifest once and hand the result to the directory.
pub async fn load_directory(directory: RwSignal<PoemDirectory>) {
    let result = fetch_manifest(MANIFEST_URL).await;
    directory.update(|d| d.apply_load(result));
}

/// Mount the directory into the page, if this page has one.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        use crate::components::poem_list::PoemList;
        use crate::components::tag_filter::TagFilterBar;
        use crate::util::dom;

        let Some(list) = dom::element_by_id("poemList") else {
            return;
        };
        let directory = RwSignal::new(PoemDirectory::new());

        let origin = dom::origin();
        list.set_inner_html("");
        leptos::mount::mount_to(list, move || view! { <PoemList directory=directory origin=origin/> }).forget();

        if let Some(container) = dom::element_by_id("tagFilterContainer") {
            container.set_inner_html("");
            leptos::mount::mount_to(container, move || view! { <TagFilterBar directory=directory/> }).forget();
        }

        if let Some(input) = dom::element_by_id("searchInput")
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            let source = input.clone();
            dom::listen(&input, "input", move |_| {
                let text = source.value();
                directory.update(|d| d.set_search(&text));
            });
        }

        leptos::task::spawn_local(load_directory(directory));
    }
}
