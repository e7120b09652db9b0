//! Tracking-code lookup for customers calling about their device.
//!
//! A miss shows nothing. The hit is resolved against the live store on each
//! render, so a status move made on the board is reflected immediately.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::state::desk::DeskState;

#[cfg(test)]
#[path = "customer_lookup_test.rs"]
mod customer_lookup_test;

/// Shown under every hit. The lookup itself is not access-checked.
pub const LOOKUP_NOTE: &str = "Not: Bu prototip verileri örnektir. Gerçekte kimlik doğrulama olmadan yalnızca durum ve temel bilgiler gösterilir.";

#[component]
pub fn CustomerLookup() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let code = RwSignal::new(String::new());
    let found_id = RwSignal::new(None::<String>);

    let on_lookup = move || {
        let hit = desk.with(|d| code.with(|c| d.find(c).map(|t| t.id.clone())));
        found_id.set(hit);
    };

    let found = move || found_id.get().and_then(|id| desk.with(|d| d.store.get(&id).cloned()));

    view! {
        <section class="lookup">
            <header class="lookup__header">
                <h2 class="lookup__title">"Müşteri Takip"</h2>
                <p class="lookup__subtitle">"Takip numarasıyla durum sorgulayın"</p>
            </header>
            <div class="lookup__form">
                <input
                    class="lookup__code"
                    placeholder="Takip No örn. TRK-240813-001"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_lookup();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| on_lookup()>
                    "Sorgula"
                </button>
            </div>
            {move || {
                found()
                    .map(|t| {
                        view! {
                            <div class="lookup__result">
                                <div class="lookup__result-head">
                                    <span class="lookup__device">{t.device()}</span>
                                    <StatusBadge status_key=t.status.clone()/>
                                </div>
                                <div class="lookup__customer">{format!("Müşteri: {}", t.customer)}</div>
                                <div class="lookup__facts">
                                    <div>{format!("Arıza: {}", t.issue)}</div>
                                    <div>{format!("ETA: {}", t.eta)}</div>
                                </div>
                                <p class="lookup__note">{LOOKUP_NOTE}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
