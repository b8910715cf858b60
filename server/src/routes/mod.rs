//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the hydration bundle and
//! stylesheet under `/pkg`, and a liveness check. There are no API routes: the
//! contact form never talks to the server.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portfolio::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Read Leptos options from the `LEPTOS_*` environment set by `cargo leptos`.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the configuration is missing or
/// malformed.
pub fn leptos_options() -> Result<LeptosOptions, ServerError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ServerError::Leptos(e.to_string()))
}

/// SSR page + static assets + health check.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
