mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::redirect_handler;
use shortlink::domain::repositories::ShortLinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{short_id}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_visit() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{short_id}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "clickme", "https://example.com").await;

    server.get("/clickme").await;
    server.get("/clickme").await;

    let link = repo.find_by_short_id("clickme").await.unwrap().unwrap();
    assert_eq!(link.total_clicks(), 2);
    assert!(link.visit_history[0].timestamp <= link.visit_history[1].timestamp);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{short_id}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_redirect_malformed_id_is_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/bad%20id").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_does_not_touch_other_links() {
    let (server, repo) = common::create_test_server();

    common::create_test_link(&repo, "first", "https://one.example").await;
    common::create_test_link(&repo, "second", "https://two.example").await;

    server.get("/first").await;

    assert_eq!(repo.count_visits("first").await.unwrap(), Some(1));
    assert_eq!(repo.count_visits("second").await.unwrap(), Some(0));
}
