use std::sync::Arc;

use crate::application::services::PostService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::upstream::HttpPostSource;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<HttpPostSource>>,
    pub cache: Arc<dyn CacheService>,
    /// Base URL of the content API, reported by the health endpoint.
    pub posts_api_url: String,
}

impl AppState {
    pub fn new(
        post_service: Arc<PostService<HttpPostSource>>,
        cache: Arc<dyn CacheService>,
        posts_api_url: String,
    ) -> Self {
        Self {
            post_service,
            cache,
            posts_api_url,
        }
    }
}
