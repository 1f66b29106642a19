//! Read-through cached access to the landing page posts feed.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::sources::{FetchError, PostSource};
use crate::infrastructure::cache::{CacheError, CacheService};
use thiserror::Error;
use tracing::{debug, warn};

/// Cache key holding the serialized posts feed.
pub const POSTS_CACHE_KEY: &str = "posts";

/// Number of posts requested from the upstream and the upper bound on every result.
pub const POSTS_PAGE_SIZE: usize = 6;

/// Expiration applied to the cached feed.
pub const POSTS_CACHE_TTL_SECONDS: u64 = 300;

/// Failures on the cached path. Everything except `Fetch` triggers the
/// uncached fallback.
#[derive(Debug, Error)]
enum ReadThroughError {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("Cached posts are not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Service returning the posts shown on the landing page.
///
/// Prefers the cache, populates it on miss and goes straight to the upstream
/// when the cache backend fails. Staleness up to the TTL is accepted; there is
/// no invalidation and no coordination between concurrent misses.
pub struct PostService<S: PostSource> {
    source: Arc<S>,
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl<S: PostSource> PostService<S> {
    /// Creates a post service with the default five minute TTL.
    pub fn new(source: Arc<S>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            source,
            cache,
            ttl_seconds: POSTS_CACHE_TTL_SECONDS,
        }
    }

    /// Overrides the expiration applied when the feed is cached.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Returns at most [`POSTS_PAGE_SIZE`] posts.
    ///
    /// # Request Flow
    ///
    /// 1. Read [`POSTS_CACHE_KEY`] from the cache
    /// 2. On hit, deserialize and return (no network call)
    /// 3. On miss, fetch from the upstream, cache the result with the TTL and return it
    /// 4. If the cache backend fails or the cached value cannot be decoded,
    ///    fetch directly from the upstream without touching the cache
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the upstream request fails. Cache errors
    /// never surface to the caller.
    pub async fn get_posts(&self) -> Result<Vec<Post>, FetchError> {
        match self.read_through().await {
            Ok(posts) => Ok(posts),
            Err(ReadThroughError::Fetch(e)) => Err(e),
            Err(e) => {
                warn!("Posts cache unavailable, fetching directly: {}", e);
                self.fetch_uncached().await
            }
        }
    }

    async fn read_through(&self) -> Result<Vec<Post>, ReadThroughError> {
        if let Some(cached) = self.cache.get(POSTS_CACHE_KEY).await? {
            debug!("Cache HIT for {}", POSTS_CACHE_KEY);
            let mut posts: Vec<Post> = serde_json::from_str(&cached)?;
            posts.truncate(POSTS_PAGE_SIZE);
            return Ok(posts);
        }

        debug!("Cache MISS for {}", POSTS_CACHE_KEY);
        let posts = self.fetch_uncached().await?;
        self.store(&posts).await;
        Ok(posts)
    }

    /// Writes the feed to the cache. The posts are already in hand, so a
    /// failed write is logged and not retried through the fallback.
    async fn store(&self, posts: &[Post]) {
        let payload = match serde_json::to_string(posts) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize posts for cache: {}", e);
                return;
            }
        };

        if let Err(e) = self
            .cache
            .put(POSTS_CACHE_KEY, &payload, self.ttl_seconds)
            .await
        {
            warn!("Failed to cache posts: {}", e);
        }
    }

    async fn fetch_uncached(&self) -> Result<Vec<Post>, FetchError> {
        let mut posts = self.source.fetch_posts(POSTS_PAGE_SIZE).await?;
        posts.truncate(POSTS_PAGE_SIZE);
        Ok(posts)
    }
}
