//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::LinkRepository;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The store is in-memory and cannot fail, so the endpoint always reports
/// healthy; the payload carries the current number of stored links.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let links = state.link_repository.count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("in-memory, {links} links")),
            },
        },
    })
}
