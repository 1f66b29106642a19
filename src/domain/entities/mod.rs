//! Core domain entities.
//!
//! - [`Post`] - A post fetched from the upstream content API

pub mod post;

pub use post::Post;
