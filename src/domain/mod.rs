//! Domain layer containing entities and the ports the application depends on.
//!
//! - [`entities`] - Plain data structures
//! - [`sources`] - Read-only upstream traits and their error types
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod sources;
