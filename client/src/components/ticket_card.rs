//! Kanban card with a move-to-status menu.

use leptos::prelude::*;
use tickets::{Ticket, board};

use crate::state::desk::DeskState;

#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let menu_open = RwSignal::new(false);
    let current = ticket.status.clone();

    let menu_items = board::move_targets()
        .iter()
        .map(|target| {
            let id = ticket.id.clone();
            let key = target.key;
            let is_current = current == key;
            view! {
                <button
                    class="ticket-card__menu-item"
                    class:ticket-card__menu-item--current=is_current
                    on:click=move |_| {
                        desk.update(|d| {
                            d.move_ticket(&id, key);
                        });
                        menu_open.set(false);
                    }
                >
                    {target.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="ticket-card">
            <div class="ticket-card__head">
                <span class="ticket-card__device">{ticket.device()}</span>
                <button
                    class="ticket-card__menu-toggle"
                    title="Durum değiştir"
                    aria-label="Durum değiştir"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "⋯"
                </button>
            </div>
            <div class="ticket-card__menu" class:ticket-card__menu--open=move || menu_open.get()>
                {menu_items}
            </div>
            <div class="ticket-card__id">{ticket.id.clone()}</div>
            <div class="ticket-card__issue">{ticket.issue.clone()}</div>
            <div class="ticket-card__foot">
                <span class="ticket-card__tech">{ticket.assigned.clone()}</span>
                <span class="ticket-card__eta">{format!("ETA: {}", ticket.eta)}</span>
            </div>
        </article>
    }
}
