//! Redirect resolution service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::VisitContext;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service resolving short codes to their target URLs.
///
/// Each successful resolution records a visit: the click counter and the
/// visitor log advance together in one atomic step inside the store, so
/// concurrent redirects for the same code never lose updates.
pub struct RedirectService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> RedirectService<R> {
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Resolves a short code, recording the visit.
    ///
    /// Returns the stored target URL for the caller to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Expired`] for a code past its validity window. Failure
    /// paths leave the record untouched.
    pub async fn resolve(&self, code: &str, ctx: VisitContext) -> Result<String, AppError> {
        match self.link_repository.record_visit(code, ctx).await {
            Ok(long_url) => {
                info!(code, "redirecting to long URL");
                Ok(long_url)
            }
            Err(err @ (AppError::NotFound { .. } | AppError::Expired { .. })) => {
                warn!(code, error = %err, "redirect rejected");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
