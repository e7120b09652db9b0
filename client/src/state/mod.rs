//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `desk` holds the session's ticket store; `ui` holds presentation choices
//! (active tab, dialog visibility, table filter). Both are provided as
//! `RwSignal` contexts from `App`.

pub mod desk;
pub mod ui;
