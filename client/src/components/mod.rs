//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the panel's views while reading/writing the shared
//! `DeskState` and `UiState` signals from Leptos context providers.

pub mod customer_lookup;
pub mod devices_table;
pub mod intake_dialog;
pub mod kanban_board;
pub mod metrics_bar;
pub mod status_badge;
pub mod ticket_card;
pub mod top_bar;
