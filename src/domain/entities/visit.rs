//! Visit entity recording a single redirect occurrence.

use chrono::{DateTime, Utc};

/// Referrer value recorded when the request carried no Referer header.
pub const DIRECT_REFERRER: &str = "direct";

/// One recorded redirect through a short link.
#[derive(Debug, Clone)]
pub struct Visit {
    pub visited_at: DateTime<Utc>,
    pub referrer: String,
    pub client_ip: String,
}

impl Visit {
    /// Builds a visit from request-derived context, stamping it with `now`.
    ///
    /// A missing referrer is recorded as [`DIRECT_REFERRER`].
    pub fn from_context(ctx: VisitContext, now: DateTime<Utc>) -> Self {
        Self {
            visited_at: now,
            referrer: ctx.referrer.unwrap_or_else(|| DIRECT_REFERRER.to_string()),
            client_ip: ctx.client_ip,
        }
    }
}

/// Client metadata extracted from a redirect request.
#[derive(Debug, Clone)]
pub struct VisitContext {
    pub referrer: Option<String>,
    pub client_ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_from_context_full() {
        let now = Utc::now();
        let visit = Visit::from_context(
            VisitContext {
                referrer: Some("https://google.com".to_string()),
                client_ip: "192.168.1.1".to_string(),
            },
            now,
        );

        assert_eq!(visit.visited_at, now);
        assert_eq!(visit.referrer, "https://google.com");
        assert_eq!(visit.client_ip, "192.168.1.1");
    }

    #[test]
    fn test_missing_referrer_defaults_to_direct() {
        let visit = Visit::from_context(
            VisitContext {
                referrer: None,
                client_ip: "1.2.3.4".to_string(),
            },
            Utc::now(),
        );

        assert_eq!(visit.referrer, DIRECT_REFERRER);
    }
}
