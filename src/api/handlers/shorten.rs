//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,          // optional, minutes
///   "shortcode": "my-code"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the assigned code, the full short link, and the expiry
/// timestamp.
///
/// # Errors
///
/// - `400 Bad Request` - missing/empty URL, or not an absolute URL
/// - `409 Conflict` - the short code (supplied or generated) is taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let link = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let short_link = state.link_service.short_url(&state.base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            short_link,
            expiry: link.expires_at,
        }),
    ))
}
