//! Service panel server.
//!
//! Loads configuration from the environment, sets up tracing, and serves the
//! Leptos-rendered panel. Ticket data lives in each browser session; the
//! server holds no shared state.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();
    tracing::debug!(?config, "configuration loaded");

    let app = routes::app(&config)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "tamir-desk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
