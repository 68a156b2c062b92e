//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Statistics for a short link: metadata, click count, and the visit log.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub visits: Vec<VisitInfo>,
}

/// One visit record, in chronological order.
#[derive(Debug, Serialize)]
pub struct VisitInfo {
    pub visited_at: DateTime<Utc>,
    pub referrer: String,
    pub client_ip: String,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
            expires_at: link.expires_at,
            visits: link
                .visits
                .into_iter()
                .map(|visit| VisitInfo {
                    visited_at: visit.visited_at,
                    referrer: visit.referrer,
                    client_ip: visit.client_ip,
                })
                .collect(),
        }
    }
}
