//! YouTube feed types.

use serde::{Deserialize, Serialize};

/// XML namespace of the Media RSS extension (`media:group` and friends).
pub const MEDIA_NAMESPACE: &[u8] = b"http://search.yahoo.com/mrss/";

/// Number of description characters shown on a video card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Marker appended to a truncated description preview.
pub const ELLIPSIS: &str = "...";

/// Body returned by the proxy when the upstream feed is unavailable.
pub const FEED_UNAVAILABLE_MESSAGE: &str = "Failed to fetch YouTube feed";

/// One video from the channel feed.
///
/// Every field is the raw text taken from the feed; absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    /// Video title.
    pub title: String,
    /// Description from `media:group/media:description`.
    pub description: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Watch page URL.
    pub page_url: String,
    /// Publication timestamp exactly as the feed states it.
    pub published_at: String,
}
