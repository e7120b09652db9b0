//! In-memory record store.
//!
//! DESIGN
//! ======
//! `TicketStore` is the single owner of the ticket collection. Views never
//! keep copies; they recompute from `list()` on every render. Insertion
//! order is the display order everywhere.
//!
//! Misses are silent: moving an unknown id leaves the store untouched and
//! reports `false` so callers can log it if they care.

use crate::sample::sample_tickets;
use crate::ticket::Ticket;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

/// Error returned by [`TicketStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another ticket already uses this tracking code.
    #[error("ticket id already exists: {0}")]
    DuplicateId(String),
}

/// Ordered collection of repair tickets for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    #[must_use]
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Store pre-loaded with the demo dataset.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new(sample_tickets())
    }

    /// All tickets in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Ticket with exactly this id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Set the status of ticket `id` to `status_key`.
    ///
    /// Any stage may move to any other stage, and the key is stored as given.
    /// Returns `false` (and changes nothing) when `id` is not in the store.
    pub fn move_status(&mut self, id: &str, status_key: &str) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                status_key.clone_into(&mut ticket.status);
                true
            }
            None => false,
        }
    }

    /// Append a ticket at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a ticket with the same id exists.
    /// Ids are compared ASCII-case-insensitively, as customer lookup does.
    pub fn insert(&mut self, ticket: Ticket) -> Result<(), StoreError> {
        if self.tickets.iter().any(|t| t.id.eq_ignore_ascii_case(&ticket.id)) {
            return Err(StoreError::DuplicateId(ticket.id));
        }
        self.tickets.push(ticket);
        Ok(())
    }
}
