//! Kanban partitioning of the store by status.

use crate::status::{STATUSES, Status};
use crate::store::TicketStore;
use crate::ticket::Ticket;

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;

/// One board column: a registry stage and its tickets in store order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardColumn {
    pub status: &'static Status,
    pub tickets: Vec<Ticket>,
}

impl BoardColumn {
    /// Value shown in the column's count badge.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

/// Partition the store into one column per registry stage, in registry order.
///
/// Tickets whose status key is not registered land in no column.
#[must_use]
pub fn columns(store: &TicketStore) -> Vec<BoardColumn> {
    STATUSES
        .iter()
        .map(|status| BoardColumn {
            status,
            tickets: store.list().iter().filter(|t| t.status == status.key).cloned().collect(),
        })
        .collect()
}

/// Stages offered in a card's move menu. Every stage is reachable from every other.
#[must_use]
pub fn move_targets() -> &'static [Status] {
    &STATUSES
}
