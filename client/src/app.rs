//! Page bootstrap: shared signals and behavior installation.
//!
//! DESIGN
//! ======
//! Pages are static HTML, so there is no root component or router. `mount`
//! creates one reactive owner for the page session, puts the chrome state in
//! a signal, and lets each behavior attach itself to whatever elements exist.

use std::cell::Cell;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::{pages, util};

thread_local! {
    static UI: Cell<Option<RwSignal<UiState>>> = const { Cell::new(None) };
}

/// Install every page behavior. Call once per page load.
pub fn mount() {
    #[cfg(feature = "csr")]
    {
        // Effects need the executor even on pages that never call `mount_to`.
        let _ = any_spawner::Executor::init_wasm_bindgen();
    }

    let owner = Owner::new();
    owner.set();

    let ui = RwSignal::new(UiState::default());
    UI.with(|cell| cell.set(Some(ui)));

    util::dark_mode::install(ui);
    util::font_size::install(ui);
    util::menus::install(ui);
    util::reveal::install();
    pages::poem_index::install();

    // Listeners outlive this call; the owner must too.
    std::mem::forget(owner);
}

/// Step the paragraph font size. No-op before [`mount`].
pub fn change_font_size(delta: f64) {
    if let Some(ui) = UI.with(Cell::get) {
        ui.update(|u| {
            u.step_font(delta);
        });
    }
}
