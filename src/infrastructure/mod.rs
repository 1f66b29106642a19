//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for caching and upstream access.
//!
//! # Modules
//!
//! - [`cache`] - Key-value cache backends (Redis, in-memory and no-op)
//! - [`upstream`] - HTTP client for the posts content API

pub mod cache;
pub mod upstream;
