//! # Linklet
//!
//! An in-memory URL shortening service with click analytics, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory link store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Collision-free short code assignment with optional custom codes
//! - Per-link validity windows with lazy expiry (no background sweeper)
//! - Atomic click accounting: counter and visitor log advance together
//! - Structured request logging via tower middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RedirectService, StatsService};
    pub use crate::domain::entities::{Link, NewLink, Visit, VisitContext};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
