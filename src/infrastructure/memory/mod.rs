//! In-memory storage backends.

pub mod link_store;

pub use link_store::InMemoryLinkRepository;
