//! The repair ticket record.

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use crate::status::{self, Status};

#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;

/// One device checked in for repair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Human-readable tracking code, unique within a store (`TRK-240813-001`).
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    /// Fault description given at intake.
    pub issue: String,
    /// Status registry key. Not validated; unknown keys render as nothing.
    pub status: String,
    /// Technician name from the roster, or empty when unassigned.
    pub assigned: String,
    /// Estimated completion date.
    pub eta: Date,
    pub created_at: PrimitiveDateTime,
    /// Estimated cost in whole lira.
    pub cost: u32,
}

impl Ticket {
    /// Brand and model as shown on cards and rows.
    #[must_use]
    pub fn device(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Creation time as `YYYY-MM-DD HH:MM`.
    #[must_use]
    pub fn created_label(&self) -> String {
        let at = self.created_at;
        format!(
            "{} {:02}:{:02}",
            at.date(),
            at.hour(),
            at.minute()
        )
    }

    #[must_use]
    pub fn status_info(&self) -> Option<&'static Status> {
        status::lookup(&self.status)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status != status::DELIVERED
    }

    /// Lower-cased text searched by the table's free-text filter.
    #[must_use]
    pub fn search_haystack(&self) -> String {
        [&self.id, &self.customer, &self.brand, &self.model, &self.serial]
            .map(String::as_str)
            .join(" ")
            .to_lowercase()
    }
}
