//! Application layer services.
//!
//! Services consume the domain ports and cache abstraction and expose a small
//! API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Read-through cached posts feed

pub mod services;
