//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

use super::visit::Visit;

/// A shortened URL with its click analytics.
///
/// The mapping between a short code and a long URL, together with the
/// append-only visit log. `code`, `long_url`, `created_at` and `expires_at`
/// are immutable after creation; only `clicks` and `visits` ever change, and
/// always together.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
    pub visits: Vec<Visit>,
}

impl Link {
    /// Materializes a new link at `now` with an empty visit log.
    ///
    /// A validity window too large to represent saturates `expires_at` at
    /// the representable extreme instead of overflowing.
    pub fn create(new_link: NewLink, now: DateTime<Utc>) -> Self {
        let expires_at = Duration::try_minutes(new_link.validity_minutes)
            .and_then(|window| now.checked_add_signed(window))
            .unwrap_or(if new_link.validity_minutes >= 0 {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            });

        Self {
            code: new_link.code,
            long_url: new_link.long_url,
            created_at: now,
            expires_at,
            clicks: 0,
            visits: Vec::new(),
        }
    }

    /// Returns true if the link is past its validity window at `now`.
    ///
    /// The boundary is strict: a link at exactly `expires_at` still resolves,
    /// and only stops once `now` strictly exceeds it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Records one redirect: appends the visit and bumps the counter.
    ///
    /// Callers must hold exclusive access to the link for the duration, so
    /// `clicks == visits.len()` is never observably violated.
    pub fn record_visit(&mut self, visit: Visit) {
        self.clicks += 1;
        self.visits.push(visit);
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    /// Minutes until expiry. May be negative; the store does not guard
    /// against links that are born expired.
    pub validity_minutes: i64,
}
