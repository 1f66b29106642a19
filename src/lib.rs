//! # Landing Page
//!
//! Server-rendered marketing landing page with a cached posts feed, built with
//! Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Post` entity and the upstream read port
//! - **Application Layer** ([`application`]) - The read-through [`PostService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends and the HTTP upstream client
//! - **API Layer** ([`api`]) - JSON endpoints and middleware
//! - **Web Layer** ([`web`]) - Askama-rendered landing page
//!
//! ## Posts feed
//!
//! Every render asks [`PostService::get_posts`] for at most six posts. The
//! service reads them from the cache, refreshes the cache from the content API
//! on miss (five minute TTL), and calls the content API directly when the cache
//! backend fails.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use application::services::PostService;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PostService;
    pub use crate::domain::entities::Post;
    pub use crate::domain::sources::{FetchError, PostSource};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::infrastructure::upstream::HttpPostSource;
    pub use crate::state::AppState;
}
