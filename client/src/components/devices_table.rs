//! Device list with status, technician and free-text filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter selections live in `UiState` (the top bar writes the query too);
//! rows are recomputed from `DeskState` whenever either signal changes.

use leptos::prelude::*;
use tickets::money::format_lira;
use tickets::{STATUSES, TECHNICIANS};

use crate::components::status_badge::StatusBadge;
use crate::state::desk::DeskState;
use crate::state::ui::{UiState, selection};

#[component]
pub fn DevicesTable() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let rows = move || ui.with(|u| desk.with(|d| d.rows(&u.filter)));

    view! {
        <section class="devices">
            <header class="devices__header">
                <h2 class="devices__title">"Cihaz Listesi"</h2>
                <p class="devices__subtitle">"Takip no, müşteri ya da cihaza göre filtreleyin"</p>
            </header>
            <div class="devices__filters">
                <input
                    class="devices__query"
                    type="search"
                    placeholder="Ara (Takip no, müşteri, cihaz)"
                    prop:value=move || ui.with(|u| u.filter.query.clone())
                    on:input=move |ev| ui.update(|u| u.filter.query = event_target_value(&ev))
                />
                <select
                    class="devices__select"
                    prop:value=move || ui.with(|u| u.filter.status.clone().unwrap_or_default())
                    on:change=move |ev| ui.update(|u| u.filter.status = selection(event_target_value(&ev)))
                >
                    <option value="">"Durum"</option>
                    {STATUSES.iter().map(|s| view! { <option value=s.key>{s.label}</option> }).collect_view()}
                </select>
                <select
                    class="devices__select"
                    prop:value=move || ui.with(|u| u.filter.technician.clone().unwrap_or_default())
                    on:change=move |ev| ui.update(|u| u.filter.technician = selection(event_target_value(&ev)))
                >
                    <option value="">"Teknisyen"</option>
                    {TECHNICIANS.iter().map(|&t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
                <button
                    class="btn"
                    disabled=move || !ui.with(|u| u.filter.is_active())
                    on:click=move |_| ui.update(|u| u.filter.clear())
                >
                    "Temizle"
                </button>
            </div>
            <table class="devices__table">
                <thead>
                    <tr>
                        <th>"Takip No"</th>
                        <th>"Müşteri"</th>
                        <th>"Cihaz"</th>
                        <th>"Durum"</th>
                        <th>"Teknisyen"</th>
                        <th>"Oluşturma"</th>
                        <th class="devices__cost">"Tahmini Tutar"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <tr>
                                        <td class="devices__id">{r.id.clone()}</td>
                                        <td>{r.customer.clone()}</td>
                                        <td>{r.device()}</td>
                                        <td><StatusBadge status_key=r.status.clone()/></td>
                                        <td>{r.assigned.clone()}</td>
                                        <td>{r.created_label()}</td>
                                        <td class="devices__cost">{format_lira(r.cost)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
