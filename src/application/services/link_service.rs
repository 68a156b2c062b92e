//! Link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use url::Url;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Validity window applied when the caller supplies no (or a zero) validity.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Service for creating shortened links.
///
/// Validates the target URL, assigns a short code (caller-supplied or
/// generated), and delegates the uniqueness-enforcing insertion to the store.
pub struct LinkService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `long_url` - The URL to shorten; stored verbatim after validation
    /// - `validity_minutes` - Window until expiry; `None` and `0` fall back
    ///   to [`DEFAULT_VALIDITY_MINUTES`]. Negative values are accepted and
    ///   produce a link that is already expired; windows beyond the
    ///   representable timestamp range saturate at the extreme.
    /// - `requested_code` - Optional explicit short code, used verbatim
    ///
    /// # Code Assignment
    ///
    /// When no code is requested, a random 6-character code is generated
    /// exactly once. A collision — requested or generated — surfaces as
    /// [`AppError::Conflict`]; generation is never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing/empty URL,
    /// [`AppError::InvalidUrl`] for a URL without scheme and host, and
    /// [`AppError::Conflict`] for a taken code.
    pub async fn create_short_link(
        &self,
        long_url: Option<String>,
        validity_minutes: Option<i64>,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        let long_url = long_url.unwrap_or_default();
        if long_url.is_empty() {
            return Err(AppError::bad_request("Please provide a URL", json!({})));
        }

        validate_target_url(&long_url)?;

        let validity_minutes = validity_minutes
            .filter(|minutes| *minutes != 0)
            .unwrap_or(DEFAULT_VALIDITY_MINUTES);

        let code = requested_code.unwrap_or_else(generate_code);

        let link = self
            .link_repository
            .create(NewLink {
                code,
                long_url,
                validity_minutes,
            })
            .await?;

        info!(code = %link.code, expires_at = %link.expires_at, "saved new short link");
        Ok(link)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

/// Checks that the target parses as an absolute URL with scheme and host.
///
/// The URL is not normalized or rewritten; the caller's exact string is what
/// gets stored and later redirected to.
fn validate_target_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::invalid_url(
            "URL format is not valid",
            json!({ "reason": e.to_string() }),
        )
    })?;

    if !parsed.has_host() {
        return Err(AppError::invalid_url(
            "URL format is not valid",
            json!({ "reason": "URL has no host" }),
        ));
    }

    Ok(())
}
