//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos-rendered panel at `/`, the hydration bundle under
//! `/pkg`, and a liveness probe. There is no data API: the ticket store
//! lives in each browser session.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Panel SSR routes, static assets, and health check.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = pkg_dir(config, leptos_options.site_root.as_ref(), leptos_options.site_pkg_dir.as_ref());
    tracing::info!(pkg_dir = %pkg_dir.display(), "serving static assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the WASM/JS/CSS bundle; `SITE_ROOT` wins over Leptos options.
fn pkg_dir(config: &ServerConfig, site_root: &str, site_pkg_dir: &str) -> PathBuf {
    config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(site_root))
        .join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
