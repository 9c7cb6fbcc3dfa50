//! Router configuration for the web API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{submit_contact, youtube_feed, AppState};
use super::middleware::{
    contact_rate_limit, create_cors_layer, security_headers, RateLimitState,
};

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    rate_limit: Arc<RateLimitState>,
    cors_origins: &[String],
) -> Router {
    let contact_routes = Router::new()
        .route("/contact", post(submit_contact))
        .layer(middleware::from_fn(move |req, next| {
            let state = rate_limit.clone();
            contact_rate_limit(state, req, next)
        }));

    let api_routes = Router::new()
        .route("/youtube", get(youtube_feed))
        .merge(contact_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
