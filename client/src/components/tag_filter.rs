//! Tag filter buttons generated from the loaded manifest.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered into `#tagFilterContainer`. Buttons appear once the manifest has
//! loaded; exactly one is active, and "All" clears the tag filter.

use leptos::prelude::*;

use crate::state::directory::PoemDirectory;

#[component]
pub fn TagFilterBar(directory: RwSignal<PoemDirectory>) -> impl IntoView {
    let options = Memo::new(move |_| directory.with(PoemDirectory::tag_options));

    move || {
        options
            .get()
            .into_iter()
            .map(|option| {
                let value = option.value;
                let on_click = {
                    let value = value.clone();
                    move |_: leptos::ev::MouseEvent| directory.update(|d| d.set_tag(&value))
                };
                view! {
                    <button class="filter-button" class:active=option.active data-tag=value on:click=on_click>
                        {option.label}
                    </button>
                }
            })
            .collect_view()
    }
}
