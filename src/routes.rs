//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a shortened URL
//! - `GET  /shorturls/{code}` - Statistics for a specific link
//! - `GET  /health`           - Health check
//! - `GET  /{code}`           - Short link redirect
//!
//! Literal routes take precedence over the `/{code}` catch-all, so `health`
//! and `shorturls` are effectively reserved codes.
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::api_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
