//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// Returns link metadata, the click count, and every recorded visit in
/// chronological order. Expired links remain queryable.
///
/// # Errors
///
/// Returns `404 Not Found` if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.get_stats(&code).await?;

    Ok(Json(link.into()))
}
