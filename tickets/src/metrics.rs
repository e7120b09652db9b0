//! Headline numbers for the metrics bar.

use time::Date;

use crate::status;
use crate::store::TicketStore;

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

/// Counts derived from the store at render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeskMetrics {
    pub total: usize,
    /// Tickets not yet handed back to the customer.
    pub open: usize,
    pub awaiting_parts: usize,
    pub ready: usize,
    /// Open tickets whose estimate is today or already past.
    pub due_today: usize,
}

impl DeskMetrics {
    #[must_use]
    pub fn compute(store: &TicketStore, today: Date) -> Self {
        store.list().iter().fold(Self::default(), |mut m, t| {
            m.total += 1;
            if t.is_open() {
                m.open += 1;
                if t.eta <= today {
                    m.due_today += 1;
                }
            }
            match t.status.as_str() {
                status::AWAITING_PARTS => m.awaiting_parts += 1,
                status::READY => m.ready += 1,
                _ => {}
            }
            m
        })
    }

    /// Share of open tickets, 0..=100, for the progress bar.
    #[must_use]
    pub fn open_ratio_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.open * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}
