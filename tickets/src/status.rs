//! Fixed lifecycle stages and the technician roster.
//!
//! DESIGN
//! ======
//! Tickets carry their status as a plain key string so an unknown key can
//! exist without failing anything; every renderer resolves it through
//! [`lookup`] and draws nothing on a miss.

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

/// Display metadata for one lifecycle stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    /// Stable identifier stored on tickets, e.g. `"tamir"`.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Style tag used to build the badge modifier class.
    pub tone: &'static str,
}

/// Registry of stages, in pipeline order.
pub static STATUSES: [Status; 6] = [
    Status { key: "geldi", label: "Geldi", tone: "slate" },
    Status { key: "parca", label: "Parça Bekleniyor", tone: "amber" },
    Status { key: "tamir", label: "Tamir Ediliyor", tone: "blue" },
    Status { key: "test", label: "Test", tone: "purple" },
    Status { key: "hazir", label: "Teslime Hazır", tone: "emerald" },
    Status { key: "teslim", label: "Teslim Edildi", tone: "zinc" },
];

/// Technicians that tickets may be assigned to.
pub const TECHNICIANS: [&str; 5] = ["Ece", "Mert", "Burak", "Zeynep", "Umut"];

/// Stage counted as "awaiting parts" on the metrics bar.
pub const AWAITING_PARTS: &str = "parca";
/// Stage counted as ready for pickup.
pub const READY: &str = "hazir";
/// Final stage; delivered tickets are no longer open.
pub const DELIVERED: &str = "teslim";

/// Resolve a status key. Unknown keys return `None`.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static Status> {
    STATUSES.iter().find(|s| s.key == key)
}

/// Stage assigned to freshly registered devices.
#[must_use]
pub fn initial() -> &'static Status {
    &STATUSES[0]
}

impl Status {
    /// CSS modifier class for this stage's badge.
    #[must_use]
    pub fn badge_class(&self) -> String {
        format!("status-badge status-badge--{}", self.tone)
    }
}
