//! Local UI chrome state (tabs, dialog visibility, table filter).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of ticket data (`desk`) so
//! switching tabs or editing filters never touches the store.

use tickets::TicketFilter;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the panel page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelTab {
    /// Kanban process board.
    #[default]
    Board,
    /// Filterable device table.
    Table,
    /// Customer tracking-code lookup.
    Lookup,
}

impl PanelTab {
    pub const ALL: [Self; 3] = [Self::Board, Self::Table, Self::Lookup];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Board => "Süreç",
            Self::Table => "Cihazlar",
            Self::Lookup => "Müşteri",
        }
    }
}

/// UI state for the panel page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: PanelTab,
    pub intake_open: bool,
    pub filter: TicketFilter,
}

impl UiState {
    /// Route a top-bar search into the device table.
    pub fn quick_search(&mut self, query: String) {
        self.filter.query = query;
        self.active_tab = PanelTab::Table;
    }
}

/// Map a `<select>` value to an optional filter clause; the empty option means "any".
#[must_use]
pub fn selection(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
