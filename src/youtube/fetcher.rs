//! Upstream channel feed fetcher.
//!
//! Retrieves the raw Atom document for the configured channel. The proxy
//! endpoint relays the bytes unchanged; [`FeedFetcher::fetch_videos`] decodes
//! them for server-side callers.

use std::time::Duration;

use reqwest::Client;

use crate::config::YoutubeConfig;
use crate::error::{Result, ShowcaseError};
use crate::youtube::decoder::decode;
use crate::youtube::types::VideoEntry;

/// User agent string for feed fetching.
const USER_AGENT: &str = "showcase/0.1 (feed relay)";

/// Fetcher for the configured channel feed.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
    feed_url: url::Url,
    max_feed_size: u64,
}

impl FeedFetcher {
    /// Create a fetcher from the YouTube configuration.
    pub fn new(config: &YoutubeConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ShowcaseError::Upstream(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            feed_url: config.feed_url()?,
            max_feed_size: config.max_feed_size_bytes,
        })
    }

    /// The upstream URL this fetcher reads from.
    pub fn feed_url(&self) -> &url::Url {
        &self.feed_url
    }

    /// Fetch the raw feed document.
    ///
    /// Fails on transport errors, non-success statuses and oversized bodies.
    /// Nothing is retried.
    pub async fn fetch_raw(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.feed_url.clone())
            .send()
            .await
            .map_err(|e| ShowcaseError::Upstream(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ShowcaseError::Upstream(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_feed_size {
                return Err(ShowcaseError::Upstream(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, self.max_feed_size
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShowcaseError::Upstream(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > self.max_feed_size {
            return Err(ShowcaseError::Upstream(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                self.max_feed_size
            )));
        }

        tracing::debug!(url = %self.feed_url, size = bytes.len(), "Fetched channel feed");
        Ok(bytes.to_vec())
    }

    /// Fetch the feed and decode it into videos.
    pub async fn fetch_videos(&self) -> Result<Vec<VideoEntry>> {
        let bytes = self.fetch_raw().await?;
        let xml = String::from_utf8_lossy(&bytes);
        decode(&xml)
    }
}
