//! # client
//!
//! Leptos frontend for the repair-shop service panel.
//!
//! This crate contains the panel page, its components (board, device table,
//! tracking lookup, intake dialog), and the per-session reactive state that
//! wraps a `tickets::TicketStore`. The server renders it with the `ssr`
//! feature; the browser bundle hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
