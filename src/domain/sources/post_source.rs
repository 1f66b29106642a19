//! Upstream read port for posts.

use crate::domain::entities::Post;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while reading posts from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The upstream answered with a non-success status code.
    #[error("Upstream responded with status {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The response body is not a JSON array of posts.
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

/// Source of truth for the posts shown on the landing page.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpPostSource`] - HTTP client for the content API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetches at most `limit` posts from the upstream.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] on a non-success response,
    /// [`FetchError::Transport`] when no response was received and
    /// [`FetchError::Decode`] when the body cannot be parsed.
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, FetchError>;
}
