//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::domain::entities::VisitContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolving records the visit: the Referer header (or `"direct"` when
/// absent) and the peer address are appended to the visitor log and the
/// click counter advances, atomically with the expiry check.
///
/// # Errors
///
/// - `404 Not Found` - unknown short code
/// - `410 Gone` - the link's validity window has passed
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = VisitContext {
        referrer: headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        client_ip: addr.ip().to_string(),
    };

    let long_url = state.redirect_service.resolve(&code, ctx).await?;

    Ok(Redirect::temporary(&long_url))
}
