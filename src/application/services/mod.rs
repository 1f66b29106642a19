//! Business logic services for the application layer.

pub mod post_service;

pub use post_service::{POSTS_CACHE_KEY, POSTS_CACHE_TTL_SECONDS, POSTS_PAGE_SIZE, PostService};
