//! Link statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Read-only projection over a link's click analytics.
///
/// Returns point-in-time snapshots; two reads with no intervening writes are
/// identical. Expiry is deliberately not filtered here — statistics stay
/// queryable after a link stops resolving.
pub struct StatsService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Retrieves a snapshot of a link and its visit log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }
}
