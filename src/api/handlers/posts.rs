//! Handler for the posts feed endpoint.

use axum::{Json, extract::State};

use crate::api::dto::posts::PostListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the posts shown on the landing page as JSON.
///
/// # Endpoint
///
/// `GET /api/posts`
///
/// Served through the same read-through cache as the landing page.
///
/// # Errors
///
/// Returns 502 Bad Gateway if the content API fails and nothing is cached.
pub async fn posts_handler(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, AppError> {
    let posts = state.post_service.get_posts().await?;
    Ok(Json(posts.into()))
}
