//! HTTP client for the upstream content API.

use crate::domain::entities::Post;
use crate::domain::sources::{FetchError, PostSource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

/// Reads posts from `GET {base_url}/posts?_limit={limit}`.
///
/// The `reqwest` client is shared across requests so connections are pooled.
pub struct HttpPostSource {
    client: Client,
    endpoint: String,
}

impl HttpPostSource {
    /// Creates a client for the content API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        let endpoint = format!("{}/posts", base.as_str().trim_end_matches('/'));
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Full URL of the posts collection, without query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let mut posts: Vec<Post> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        if posts.len() > limit {
            debug!(
                "Upstream returned {} posts for _limit={}, truncating",
                posts.len(),
                limit
            );
            posts.truncate(limit);
        }

        info!(
            "Fetched {} posts from {} in {} ms",
            posts.len(),
            self.endpoint,
            start.elapsed().as_millis()
        );

        Ok(posts)
    }
}
