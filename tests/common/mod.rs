#![allow(dead_code)]

use axum::extract::RawQuery;
use axum::http::{StatusCode, header};
use axum::{Router, routing::get};
use landing_page::application::services::PostService;
use landing_page::domain::entities::Post;
use landing_page::infrastructure::cache::CacheService;
use landing_page::infrastructure::upstream::HttpPostSource;
use landing_page::state::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the content API, serving a fixed `/posts` response.
pub struct StubUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

impl StubUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

pub fn sample_posts(count: i64) -> Vec<Post> {
    (1..=count)
        .map(|id| {
            Post::new(
                id,
                format!("Post number {id}"),
                format!("Body of post {id}"),
                (id % 3) + 1,
            )
        })
        .collect()
}

pub async fn spawn_upstream(status: StatusCode, body: String) -> StubUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_query = Arc::new(Mutex::new(None));

    let counter = hits.clone();
    let recorded = last_query.clone();
    let app = Router::new().route(
        "/posts",
        get(move |RawQuery(query): RawQuery| {
            let counter = counter.clone();
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                *recorded.lock().unwrap() = query;
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{addr}"),
        hits,
        last_query,
    }
}

pub async fn spawn_posts_upstream(posts: &[Post]) -> StubUpstream {
    spawn_upstream(StatusCode::OK, serde_json::to_string(posts).unwrap()).await
}

pub fn create_test_state(base_url: &str, cache: Arc<dyn CacheService>) -> AppState {
    let source = Arc::new(HttpPostSource::new(base_url).unwrap());
    let post_service = Arc::new(PostService::new(source, cache.clone()));

    AppState::new(post_service, cache, base_url.to_string())
}
