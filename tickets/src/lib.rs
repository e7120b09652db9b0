//! Repair-ticket domain model shared by the `client` UI and the server.
//!
//! This crate owns everything the service panel computes: the fixed status
//! registry, the ticket record, the in-memory store, and the derived views
//! (board columns, table filter, tracking lookup, headline metrics). It does
//! no I/O; the UI layer owns one [`TicketStore`] per session and passes it
//! explicitly to every operation.

pub mod board;
pub mod filter;
pub mod intake;
pub mod lookup;
pub mod metrics;
pub mod money;
pub mod sample;
pub mod status;
pub mod store;
pub mod ticket;

pub use board::BoardColumn;
pub use filter::TicketFilter;
pub use intake::{IntakeDraft, IntakeError, IntakeField};
pub use metrics::DeskMetrics;
pub use status::{Status, STATUSES, TECHNICIANS};
pub use store::{StoreError, TicketStore};
pub use ticket::Ticket;
