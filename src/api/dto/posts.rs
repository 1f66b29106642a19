//! DTOs for the posts feed endpoint.

use serde::Serialize;

use crate::domain::entities::Post;

/// Posts shown on the landing page.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<Post>,
    pub count: usize,
}

impl From<Vec<Post>> for PostListResponse {
    fn from(items: Vec<Post>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
