//! YouTube channel feed module.
//!
//! This module provides:
//! - Fetching the channel's Atom feed from YouTube
//! - Decoding the feed into [`VideoEntry`] records
//! - The consumer state contract and video card view model

pub mod card;
pub mod consumer;
pub mod decoder;
pub mod fetcher;
pub mod types;

pub use card::{preview_description, VideoCard};
pub use consumer::{FeedClient, FeedDisplay, FeedState, FeedWidget};
pub use decoder::decode;
pub use fetcher::FeedFetcher;
pub use types::{
    VideoEntry, DESCRIPTION_PREVIEW_CHARS, ELLIPSIS, FEED_UNAVAILABLE_MESSAGE, MEDIA_NAMESPACE,
};
