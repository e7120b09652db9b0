//! Service panel page: top bar, metrics, and the three tabbed views.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It composes the board, device table and customer
//! lookup under a tab strip and mounts the intake dialog on demand.

use leptos::prelude::*;

use crate::components::customer_lookup::CustomerLookup;
use crate::components::devices_table::DevicesTable;
use crate::components::intake_dialog::IntakeDialog;
use crate::components::kanban_board::KanbanBoard;
use crate::components::metrics_bar::MetricsBar;
use crate::components::top_bar::TopBar;
use crate::state::ui::{PanelTab, UiState};

#[component]
pub fn PanelPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.with(|u| u.active_tab);

    let tabs = PanelTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || active() == tab
                    on:click=move |_| ui.update(|u| u.active_tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="panel-page">
            <TopBar/>
            <main class="panel-page__main">
                <div class="panel-page__heading">
                    <h1>"Servis Yönetim Paneli"</h1>
                    <p>"Ürün takibi, müşteri bilgilendirme ve ekip yönetimi bir arada"</p>
                </div>
                <MetricsBar/>
                <nav class="tabs">{tabs}</nav>
                <div class="tabs__content">
                    {move || match active() {
                        PanelTab::Board => view! { <KanbanBoard/> }.into_any(),
                        PanelTab::Table => view! { <DevicesTable/> }.into_any(),
                        PanelTab::Lookup => view! { <CustomerLookup/> }.into_any(),
                    }}
                </div>
            </main>
            <Show when=move || ui.with(|u| u.intake_open)>
                <IntakeDialog/>
            </Show>
        </div>
    }
}
