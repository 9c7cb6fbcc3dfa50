//! YouTube feed proxy handler.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::web::dto::FeedErrorResponse;
use crate::web::handlers::AppState;
use crate::youtube::FEED_UNAVAILABLE_MESSAGE;

/// GET /api/youtube - Relay the channel feed unchanged.
///
/// The browser cannot fetch the feed cross-origin, so it is served from here
/// with a public cache directive. Any upstream failure becomes a `500` with a
/// fixed JSON body.
pub async fn youtube_feed(State(state): State<Arc<AppState>>) -> Response {
    match state.feed_fetcher.fetch_raw().await {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/xml".to_string()),
                (
                    header::CACHE_CONTROL,
                    format!("public, max-age={}", state.cache_max_age_secs),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching YouTube feed");
            feed_unavailable()
        }
    }
}

/// The proxy's failure response.
fn feed_unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FeedErrorResponse {
            error: FEED_UNAVAILABLE_MESSAGE,
        }),
    )
        .into_response()
}
