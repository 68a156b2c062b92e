//! Repository trait for short link storage.

use crate::domain::entities::{Link, NewLink, VisitContext};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for shortened links.
///
/// The store owns the shortcode → link mapping for the lifetime of the
/// process and is the single arbiter of uniqueness, expiry, and click
/// accounting. Mutating operations are atomic check-then-act sequences;
/// reads return consistent snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link, stamping it with the current time.
    ///
    /// The existence check and the insertion are a single atomic step: two
    /// concurrent creations of the same code cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken. Generated
    /// codes are not retried on collision; the conflict is surfaced as-is.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// Returns a cloned snapshot; under concurrent resolves the snapshot is
    /// always internally consistent (`clicks == visits.len()`). Expired links
    /// are still returned — expiry is enforced only by [`Self::record_visit`].
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically records one redirect and returns the target URL.
    ///
    /// Holds exclusive access to the link for the whole expiry check,
    /// counter increment, and visit append. No mutation occurs on failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Expired`] once the current time strictly exceeds the
    /// link's expiry.
    async fn record_visit(&self, code: &str, ctx: VisitContext) -> Result<String, AppError>;

    /// Number of stored links, expired entries included.
    async fn count(&self) -> usize;
}
