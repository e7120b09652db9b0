//! Tracking-code lookup for the customer view.

use crate::store::TicketStore;
use crate::ticket::Ticket;

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;

/// Find the ticket whose id equals `code`, ignoring ASCII case and
/// surrounding whitespace. A blank code finds nothing.
#[must_use]
pub fn find<'a>(store: &'a TicketStore, code: &str) -> Option<&'a Ticket> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    store.list().iter().find(|t| t.id.eq_ignore_ascii_case(code))
}
