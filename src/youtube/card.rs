//! Video card view model.

use serde::Serialize;

use crate::youtube::types::{VideoEntry, DESCRIPTION_PREVIEW_CHARS, ELLIPSIS};

/// What a rendered video card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    /// Card heading and thumbnail alt text.
    pub title: String,
    /// Link target of the whole card.
    pub page_url: String,
    /// Thumbnail image source.
    pub thumbnail_url: String,
    /// Description shortened for display.
    pub description_preview: String,
}

impl From<&VideoEntry> for VideoCard {
    fn from(entry: &VideoEntry) -> Self {
        Self {
            title: entry.title.clone(),
            page_url: entry.page_url.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
            description_preview: preview_description(&entry.description),
        }
    }
}

/// Shorten a description to the card preview length.
///
/// Text longer than the limit is cut to exactly the limit and the ellipsis
/// marker is appended. Lengths count characters, not bytes.
pub fn preview_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
