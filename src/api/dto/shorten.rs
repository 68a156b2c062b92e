//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` is an `Option` so a missing field reaches the service layer and is
/// rejected there as a validation error rather than as a deserialize failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: Option<String>,

    /// Validity window in minutes. Omitted or zero falls back to the
    /// 30-minute default; negative values are accepted as-is.
    pub validity: Option<i64>,

    /// Optional explicit short code, used verbatim.
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
