//! API route configuration.

use crate::api::handlers::posts_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /posts` - Posts feed (read-through cached)
pub fn routes() -> Router<AppState> {
    Router::new().route("/posts", get(posts_handler))
}
