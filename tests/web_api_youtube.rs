//! Feed proxy API tests.

mod common;

use std::sync::Arc;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use showcase::web::middleware::RateLimitState;
use showcase::web::{create_router, AppState};
use showcase::Config;
use std::collections::HashMap;

use common::{closed_addr, create_test_config, spawn_upstream, SAMPLE_FEED};

fn create_test_server(config: &Config) -> TestServer {
    let app_state = Arc::new(AppState::new(config).expect("Failed to create app state"));
    let rate_limit = Arc::new(RateLimitState::new(config.web.contact_rate_limit));
    let router = create_router(app_state, rate_limit, &config.web.cors_origins);
    TestServer::new(router).expect("Failed to create test server")
}

fn feed_upstream(body: &'static str) -> Router {
    Router::new().route(
        "/feeds/videos.xml",
        get(move |Query(params): Query<HashMap<String, String>>| async move {
            if params.get("channel_id").map(String::as_str) != Some("UCtest") {
                return (StatusCode::NOT_FOUND, "unknown channel").into_response();
            }
            ([(header::CONTENT_TYPE, "application/atom+xml")], body).into_response()
        }),
    )
}

#[tokio::test]
async fn test_feed_relayed_unchanged() {
    let upstream = spawn_upstream(feed_upstream(SAMPLE_FEED)).await;
    let server = create_test_server(&create_test_config(upstream));

    let response = server.get("/api/youtube").await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/xml"
    );
    assert_eq!(
        response.header(header::CACHE_CONTROL),
        "public, max-age=3600"
    );
    assert_eq!(response.text(), SAMPLE_FEED);
}

#[tokio::test]
async fn test_feed_cache_age_from_config() {
    let upstream = spawn_upstream(feed_upstream(SAMPLE_FEED)).await;
    let mut config = create_test_config(upstream);
    config.youtube.cache_max_age_secs = 60;
    let server = create_test_server(&config);

    let response = server.get("/api/youtube").await;

    response.assert_status_ok();
    assert_eq!(response.header(header::CACHE_CONTROL), "public, max-age=60");
}

#[tokio::test]
async fn test_feed_body_not_validated() {
    let upstream = spawn_upstream(feed_upstream("not xml at all")).await;
    let server = create_test_server(&create_test_config(upstream));

    let response = server.get("/api/youtube").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "not xml at all");
}

#[tokio::test]
async fn test_feed_upstream_error_status() {
    let router = Router::new().route(
        "/feeds/videos.xml",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let upstream = spawn_upstream(router).await;
    let server = create_test_server(&create_test_config(upstream));

    let response = server.get("/api/youtube").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        "application/json"
    );
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Failed to fetch YouTube feed" }));
    assert_eq!(response.text(), r#"{"error":"Failed to fetch YouTube feed"}"#);
}

#[tokio::test]
async fn test_feed_upstream_unreachable() {
    let server = create_test_server(&create_test_config(closed_addr().await));

    let response = server.get("/api/youtube").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to fetch YouTube feed");
}

#[tokio::test]
async fn test_feed_upstream_not_found() {
    let upstream = spawn_upstream(feed_upstream(SAMPLE_FEED)).await;
    let mut config = create_test_config(upstream);
    config.youtube.channel_id = "UCother".to_string();
    let server = create_test_server(&config);

    let response = server.get("/api/youtube").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_feed_oversized_body() {
    let upstream = spawn_upstream(feed_upstream(SAMPLE_FEED)).await;
    let mut config = create_test_config(upstream);
    config.youtube.max_feed_size_bytes = 16;
    let server = create_test_server(&config);

    let response = server.get("/api/youtube").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_responses_not_cached() {
    let server = create_test_server(&create_test_config(closed_addr().await));

    let response = server.get("/api/youtube").await;

    assert_eq!(
        response.header(header::CACHE_CONTROL),
        "no-store, max-age=0"
    );
}
