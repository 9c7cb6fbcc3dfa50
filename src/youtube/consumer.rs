//! Feed consumer.
//!
//! Fetches the feed through the proxy endpoint, decodes it and resolves the
//! widget state. A widget loads exactly once: `Loading` settles into either
//! `Ready` or `Unavailable` and never changes again.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, ShowcaseError};
use crate::youtube::card::VideoCard;
use crate::youtube::decoder::decode;
use crate::youtube::types::VideoEntry;

/// Load state of a video feed widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    /// The fetch has not settled yet.
    #[default]
    Loading,
    /// At least one video was decoded.
    Ready(Vec<VideoEntry>),
    /// The fetch or decode failed, or the feed had no entries.
    Unavailable,
}

impl FeedState {
    /// Resolve the outcome of a fetch-and-decode.
    pub fn from_result(result: Result<Vec<VideoEntry>>) -> Self {
        match result {
            Ok(videos) if videos.is_empty() => FeedState::Unavailable,
            Ok(videos) => FeedState::Ready(videos),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching YouTube feed");
                FeedState::Unavailable
            }
        }
    }

    /// Whether the state is final.
    pub fn is_settled(&self) -> bool {
        !matches!(self, FeedState::Loading)
    }
}

/// What the widget shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedDisplay<'a> {
    /// Loading placeholder.
    Loading,
    /// Error message pointing at the channel page.
    Unavailable {
        /// Link to the channel page.
        channel_page_url: &'a str,
    },
    /// Video cards in feed order.
    Videos(Vec<VideoCard>),
}

/// Client for the same-origin feed proxy.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    proxy_url: url::Url,
}

impl FeedClient {
    /// Create a client for the proxy endpoint at `proxy_url`.
    pub fn new(proxy_url: &str, timeout: Duration) -> Result<Self> {
        let proxy_url = url::Url::parse(proxy_url)
            .map_err(|e| ShowcaseError::Config(format!("invalid proxy URL: {}", e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShowcaseError::Upstream(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, proxy_url })
    }

    /// Fetch the proxy and decode the response body.
    pub async fn fetch_videos(&self) -> Result<Vec<VideoEntry>> {
        let response = self
            .client
            .get(self.proxy_url.clone())
            .send()
            .await
            .map_err(|e| ShowcaseError::Upstream(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ShowcaseError::Upstream(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let xml = response
            .text()
            .await
            .map_err(|e| ShowcaseError::Upstream(format!("failed to read response: {}", e)))?;

        decode(&xml)
    }

    /// Fetch once and resolve the resulting state.
    pub async fn load(&self) -> FeedState {
        FeedState::from_result(self.fetch_videos().await)
    }
}

/// State of one mounted video feed widget.
#[derive(Debug, Clone)]
pub struct FeedWidget {
    state: FeedState,
    channel_page_url: String,
}

impl FeedWidget {
    /// Create a widget in the loading state.
    pub fn new(channel_page_url: impl Into<String>) -> Self {
        Self {
            state: FeedState::Loading,
            channel_page_url: channel_page_url.into(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Settle the widget with a fetch outcome.
    ///
    /// Returns `false` without changing anything when already settled.
    pub fn settle(&mut self, result: Result<Vec<VideoEntry>>) -> bool {
        if self.state.is_settled() {
            return false;
        }
        self.state = FeedState::from_result(result);
        true
    }

    /// Perform the single fetch for this widget.
    ///
    /// Does nothing once the widget has settled.
    pub async fn mount(&mut self, client: &FeedClient) {
        if self.state.is_settled() {
            return;
        }
        let result = client.fetch_videos().await;
        self.settle(result);
    }

    /// What to render for the current state.
    pub fn display(&self) -> FeedDisplay<'_> {
        match &self.state {
            FeedState::Loading => FeedDisplay::Loading,
            FeedState::Unavailable => FeedDisplay::Unavailable {
                channel_page_url: &self.channel_page_url,
            },
            FeedState::Ready(videos) => {
                FeedDisplay::Videos(videos.iter().map(VideoCard::from).collect())
            }
        }
    }
}
