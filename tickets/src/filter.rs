//! Device table filtering.
//!
//! A ticket passes when every active clause holds. Clauses are independent
//! predicates, so their order never changes the result.

use crate::store::TicketStore;
use crate::ticket::Ticket;

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

/// Current table filter selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Exact status key, or `None` for all stages.
    pub status: Option<String>,
    /// Exact technician name, or `None` for everyone.
    pub technician: Option<String>,
    /// Free-text query; empty passes everything.
    pub query: String,
}

impl TicketFilter {
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status_matches(ticket) && self.technician_matches(ticket) && self.query_matches(ticket)
    }

    /// Tickets passing the filter, in store order.
    #[must_use]
    pub fn apply<'a>(&self, store: &'a TicketStore) -> Vec<&'a Ticket> {
        store.list().iter().filter(|t| self.matches(t)).collect()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.technician.is_some() || !self.query.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn status_matches(&self, ticket: &Ticket) -> bool {
        self.status.as_deref().is_none_or(|s| ticket.status == s)
    }

    pub(crate) fn technician_matches(&self, ticket: &Ticket) -> bool {
        self.technician.as_deref().is_none_or(|t| ticket.assigned == t)
    }

    pub(crate) fn query_matches(&self, ticket: &Ticket) -> bool {
        self.query.is_empty() || ticket.search_haystack().contains(&self.query.to_lowercase())
    }
}
