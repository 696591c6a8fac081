#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use shortlink::domain::entities::NewShortLink;
use shortlink::domain::repositories::ShortLinkRepository;
use shortlink::infrastructure::persistence::MemoryShortLinkRepository;
use shortlink::routes::{app_router, router};
use shortlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

pub fn create_test_state() -> (AppState, MemoryShortLinkRepository) {
    let repo = MemoryShortLinkRepository::new();
    let state = AppState::new(Arc::new(repo.clone()), BASE_URL);
    (state, repo)
}

pub fn create_test_app() -> (Router, MemoryShortLinkRepository) {
    let (state, repo) = create_test_state();
    (router(state), repo)
}

pub fn create_test_server() -> (TestServer, MemoryShortLinkRepository) {
    let (app, repo) = create_test_app();
    (TestServer::new(app).unwrap(), repo)
}

pub async fn create_test_link(repo: &MemoryShortLinkRepository, short_id: &str, url: &str) {
    repo.create(NewShortLink {
        short_id: short_id.to_string(),
        redirect_url: url.to_string(),
    })
    .await
    .unwrap();
}

/// Serves the full router on an ephemeral local port and returns its origin.
pub async fn spawn_server() -> (String, MemoryShortLinkRepository) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());

    let repo = MemoryShortLinkRepository::new();
    let state = AppState::new(Arc::new(repo.clone()), &origin);

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    (origin, repo)
}

/// Like [`spawn_server`], but serves the production stack including path
/// normalization.
pub async fn spawn_app_server() -> (String, MemoryShortLinkRepository) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());

    let repo = MemoryShortLinkRepository::new();
    let state = AppState::new(Arc::new(repo.clone()), &origin);
    let app = app_router(state);

    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });

    (origin, repo)
}

/// HTTP client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
