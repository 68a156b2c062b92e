use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::infrastructure::memory::InMemoryLinkRepository;

/// Shared application state injected into all handlers.
///
/// All services share one in-memory repository, which owns every link for
/// the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub redirect_service: Arc<RedirectService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
    pub link_repository: Arc<InMemoryLinkRepository>,
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: String) -> Self {
        let link_repository = Arc::new(InMemoryLinkRepository::new());

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone())),
            stats_service: Arc::new(StatsService::new(link_repository.clone())),
            link_repository,
            base_url,
        }
    }
}
