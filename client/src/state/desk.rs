//! Session-owned ticket store and the operations the panel performs on it.
//!
//! DESIGN
//! ======
//! Components never mutate `TicketStore` directly; they go through
//! `DeskState` so moves and intake submissions are logged in one place.
//! Derived views (columns, filtered rows, metrics) are recomputed from the
//! store on every read.

use time::{Date, PrimitiveDateTime};

use tickets::board::{self, BoardColumn};
use tickets::intake::{self, IntakeDraft, IntakeError};
use tickets::{DeskMetrics, Ticket, TicketFilter, TicketStore, lookup};

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

/// Ticket data for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeskState {
    pub store: TicketStore,
}

impl Default for DeskState {
    fn default() -> Self {
        Self { store: TicketStore::with_sample_data() }
    }
}

impl DeskState {
    /// Move a ticket to another stage. Unknown ids are ignored.
    pub fn move_ticket(&mut self, id: &str, status_key: &str) -> bool {
        let moved = self.store.move_status(id, status_key);
        #[cfg(feature = "hydrate")]
        {
            if moved {
                log::debug!("ticket {id} moved to {status_key}");
            } else {
                log::debug!("move ignored for unknown ticket {id}");
            }
        }
        moved
    }

    /// Register a new device from the intake form.
    ///
    /// # Errors
    ///
    /// Propagates [`IntakeError`] from validation or insertion.
    pub fn submit_intake(&mut self, draft: IntakeDraft, now: PrimitiveDateTime) -> Result<String, IntakeError> {
        let result = intake::submit(&mut self.store, draft, now);
        #[cfg(feature = "hydrate")]
        {
            match &result {
                Ok(id) => log::info!("intake registered {id}"),
                Err(e) => log::info!("intake rejected: {e}"),
            }
        }
        result
    }

    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn> {
        board::columns(&self.store)
    }

    #[must_use]
    pub fn rows(&self, filter: &TicketFilter) -> Vec<Ticket> {
        filter.apply(&self.store).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Ticket> {
        lookup::find(&self.store, code)
    }

    #[must_use]
    pub fn metrics(&self, today: Date) -> DeskMetrics {
        DeskMetrics::compute(&self.store, today)
    }
}
