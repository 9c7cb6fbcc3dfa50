//! API handlers.

pub mod contact;
pub mod youtube;

pub use contact::*;
pub use youtube::*;

use crate::config::Config;
use crate::contact::ContactClient;
use crate::youtube::FeedFetcher;
use crate::Result;

/// Shared state for all handlers.
///
/// Read-only after construction; requests never coordinate through it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream channel feed fetcher.
    pub feed_fetcher: FeedFetcher,
    /// Form relay client.
    pub contact_client: ContactClient,
    /// `max-age` advertised on relayed feed responses.
    pub cache_max_age_secs: u64,
}

impl AppState {
    /// Build the state from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            feed_fetcher: FeedFetcher::new(&config.youtube)?,
            contact_client: ContactClient::new(&config.contact)?,
            cache_max_age_secs: config.youtube.cache_max_age_secs,
        })
    }
}
