//! Read ports for external data sources.
//!
//! Implementations live in `crate::infrastructure::upstream`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod post_source;

pub use post_source::{FetchError, PostSource};

#[cfg(test)]
pub use post_source::MockPostSource;
