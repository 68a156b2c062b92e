//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Link, NewLink, Visit, VisitContext};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory link store backed by a sharded concurrent map.
///
/// `DashMap` locks per shard, so creations and visit recordings on distinct
/// codes proceed in parallel while each individual operation still holds
/// exclusive access to its entry for the whole check-then-act sequence.
/// Records are never removed: expired links stay in memory and are rejected
/// lazily by [`Self::record_visit`].
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        // The entry API pins the shard, making the existence check and the
        // insertion one atomic step. No guard is held across an await point.
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(taken) => Err(AppError::conflict(
                "This shortcode is already used",
                json!({ "code": taken.key() }),
            )),
            Entry::Vacant(slot) => {
                let link = Link::create(new_link, Utc::now());
                debug!(code = %link.code, "stored new short link");
                Ok(slot.insert(link).clone())
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        // Cloning under the shard read guard yields a consistent snapshot.
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn record_visit(&self, code: &str, ctx: VisitContext) -> Result<String, AppError> {
        let Some(mut link) = self.links.get_mut(code) else {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "code": code }),
            ));
        };

        let now = Utc::now();
        if link.is_expired_at(now) {
            return Err(AppError::expired(
                "URL has expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            ));
        }

        link.record_visit(Visit::from_context(ctx, now));
        Ok(link.long_url.clone())
    }

    async fn count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(code: &str, url: &str, validity_minutes: i64) -> NewLink {
        NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
            validity_minutes,
        }
    }

    fn ctx(ip: &str) -> VisitContext {
        VisitContext {
            referrer: None,
            client_ip: ip.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();

        let created = repo
            .create(new_link("abc123", "https://example.com", 30))
            .await
            .unwrap();
        assert_eq!(created.clicks, 0);

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.com");
        assert_eq!(found.expires_at, created.expires_at);
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let repo = InMemoryLinkRepository::new();

        let found = repo.find_by_code("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let repo = InMemoryLinkRepository::new();

        repo.create(new_link("taken", "https://example.com", 30))
            .await
            .unwrap();

        let result = repo.create(new_link("taken", "https://other.com", 30)).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

        // The original mapping is untouched.
        let found = repo.find_by_code("taken").await.unwrap().unwrap();
        assert_eq!(found.long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_record_visit_increments_and_appends() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://example.com", 30))
            .await
            .unwrap();

        let url = repo.record_visit("abc123", ctx("1.2.3.4")).await.unwrap();
        assert_eq!(url, "https://example.com");

        let link = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(link.clicks, 1);
        assert_eq!(link.visits.len(), 1);
        assert_eq!(link.visits[0].client_ip, "1.2.3.4");
        assert_eq!(link.visits[0].referrer, "direct");
    }

    #[tokio::test]
    async fn test_record_visit_not_found() {
        let repo = InMemoryLinkRepository::new();

        let result = repo.record_visit("missing", ctx("1.2.3.4")).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_visit_expired_does_not_mutate() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("old", "https://example.com", -1))
            .await
            .unwrap();

        let result = repo.record_visit("old", ctx("1.2.3.4")).await;
        assert!(matches!(result.unwrap_err(), AppError::Expired { .. }));

        let link = repo.find_by_code("old").await.unwrap().unwrap();
        assert_eq!(link.clicks, 0);
        assert!(link.visits.is_empty());
    }

    #[tokio::test]
    async fn test_expired_link_still_findable() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("old", "https://example.com", -1))
            .await
            .unwrap();

        // Expiry does not remove the record; stats stay queryable.
        assert!(repo.find_by_code("old").await.unwrap().is_some());
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_visits_lose_no_updates() {
        const VISITORS: usize = 200;

        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.create(new_link("hot", "https://example.com", 30))
            .await
            .unwrap();

        let mut handles = Vec::with_capacity(VISITORS);
        for i in 0..VISITORS {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.record_visit("hot", ctx(&format!("10.0.0.{}", i % 256)))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let link = repo.find_by_code("hot").await.unwrap().unwrap();
        assert_eq!(link.clicks, VISITORS as u64);
        assert_eq!(link.visits.len(), VISITORS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_create_same_code_single_winner() {
        const WRITERS: usize = 50;

        let repo = Arc::new(InMemoryLinkRepository::new());

        let mut handles = Vec::with_capacity(WRITERS);
        for i in 0..WRITERS {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_link("race", &format!("https://example.com/{i}"), 30))
                    .await
                    .is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_reads_never_observe_torn_counters() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        repo.create(new_link("watched", "https://example.com", 30))
            .await
            .unwrap();

        let writer = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for _ in 0..100 {
                    repo.record_visit("watched", ctx("1.1.1.1")).await.unwrap();
                }
            })
        };

        let reader = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for _ in 0..100 {
                    let link = repo.find_by_code("watched").await.unwrap().unwrap();
                    assert_eq!(link.clicks, link.visits.len() as u64);
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
    }
}
