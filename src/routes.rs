//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static: HTML pages, CSS, `poems-list.json`, and the compiled
//! `pkg/` bundle all come straight from `site_dir`. The only dynamic route
//! is the health check.

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Static site at `/` plus `/healthz`.
pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
