//! Process board: one column per status, cards in store order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Columns are recomputed from `DeskState` on every change, so a move made
//! from a card menu re-renders both the source and target columns.

use leptos::prelude::*;

use crate::components::ticket_card::TicketCard;
use crate::state::desk::DeskState;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();

    view! {
        <div class="kanban">
            {move || {
                desk.with(DeskState::columns)
                    .into_iter()
                    .map(|col| {
                        let count = col.count();
                        view! {
                            <section class="kanban__column" data-status=col.status.key>
                                <header class="kanban__column-header">
                                    <span class="kanban__column-title">{col.status.label}</span>
                                    <span class="kanban__count">{count}</span>
                                </header>
                                <div class="kanban__cards">
                                    {col
                                        .tickets
                                        .into_iter()
                                        .map(|ticket| view! { <TicketCard ticket=ticket/> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
