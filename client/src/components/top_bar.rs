//! Sticky top bar with product title, quick search and the intake button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Quick search is a shortcut into the device table: typing updates the
//! table's free-text filter and brings that tab forward.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn TopBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="top-bar">
            <span class="top-bar__brand">"Tamir Merkezi"</span>
            <span class="top-bar__spacer"></span>
            <input
                class="top-bar__search"
                type="search"
                placeholder="Hızlı ara: müşteri, cihaz, seri no"
                prop:value=move || ui.with(|u| u.filter.query.clone())
                on:input=move |ev| ui.update(|u| u.quick_search(event_target_value(&ev)))
            />
            <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.intake_open = true)>
                "+ Yeni Kayıt"
            </button>
        </header>
    }
}
