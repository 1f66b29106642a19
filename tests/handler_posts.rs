mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use landing_page::api::handlers::posts_handler;
use landing_page::application::services::{POSTS_CACHE_KEY, POSTS_PAGE_SIZE};
use landing_page::domain::entities::Post;
use landing_page::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use std::sync::Arc;
use std::time::Duration;

fn app(state: landing_page::state::AppState) -> TestServer {
    let router = Router::new()
        .route("/api/posts", get(posts_handler))
        .with_state(state);
    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_posts_endpoint_returns_upstream_posts() {
    let posts = common::sample_posts(6);
    let upstream = common::spawn_posts_upstream(&posts).await;
    let server = app(common::create_test_state(
        &upstream.base_url,
        Arc::new(NullCache::new()),
    ));

    let response = server.get("/api/posts").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 6);
    assert_eq!(json["items"][0]["title"], "Post number 1");
    assert_eq!(json["items"][0]["userId"], 2);
}

#[tokio::test]
async fn test_posts_endpoint_populates_and_reuses_cache() {
    let posts = common::sample_posts(6);
    let upstream = common::spawn_posts_upstream(&posts).await;
    let cache = Arc::new(MemoryCache::new());
    let server = app(common::create_test_state(&upstream.base_url, cache.clone()));

    server.get("/api/posts").await.assert_status_ok();
    server.get("/api/posts").await.assert_status_ok();

    assert_eq!(upstream.hits(), 1);

    let cached = cache.get(POSTS_CACHE_KEY).await.unwrap().unwrap();
    let cached: Vec<Post> = serde_json::from_str(&cached).unwrap();
    assert_eq!(cached, posts);

    let ttl = cache.ttl(POSTS_CACHE_KEY).await.unwrap();
    assert!(ttl <= Duration::from_secs(300));
    assert!(ttl > Duration::from_secs(290));
}

#[tokio::test]
async fn test_posts_endpoint_serves_cache_without_upstream() {
    let upstream =
        common::spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, String::new()).await;
    let cache = Arc::new(MemoryCache::new());
    let cached = common::sample_posts(2);
    cache
        .put(POSTS_CACHE_KEY, &serde_json::to_string(&cached).unwrap(), 300)
        .await
        .unwrap();

    let server = app(common::create_test_state(&upstream.base_url, cache));

    let response = server.get("/api/posts").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["count"], 2);
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_posts_endpoint_upstream_failure() {
    let upstream = common::spawn_upstream(StatusCode::NOT_FOUND, "{}".to_string()).await;
    let server = app(common::create_test_state(
        &upstream.base_url,
        Arc::new(MemoryCache::new()),
    ));

    let response = server.get("/api/posts").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["upstream_status"], 404);
}

#[tokio::test]
async fn test_posts_endpoint_never_exceeds_page_size() {
    let upstream = common::spawn_posts_upstream(&common::sample_posts(20)).await;
    let server = app(common::create_test_state(
        &upstream.base_url,
        Arc::new(MemoryCache::new()),
    ));

    let response = server.get("/api/posts").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["count"],
        POSTS_PAGE_SIZE
    );
}
