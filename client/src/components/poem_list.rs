//! Poem list rendered into `#poemList`.

use leptos::prelude::*;

use crate::state::directory::{ListEntry, PoemDirectory};

/// One `<li>` per directory entry; the whole list re-renders on every change.
#[component]
pub fn PoemList(directory: RwSignal<PoemDirectory>, #[prop(into)] origin: String) -> impl IntoView {
    move || {
        directory
            .with(|d| d.entries(&origin))
            .into_iter()
            .map(|entry| match entry {
                ListEntry::Placeholder(text) => view! { <li>{text}</li> }.into_any(),
                ListEntry::Link { href, text } => view! {
                    <li>
                        <a href=href>{text}</a>
                    </li>
                }
                .into_any(),
            })
            .collect_view()
    }
}
