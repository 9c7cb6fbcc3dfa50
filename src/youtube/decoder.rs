//! Channel feed decoder.
//!
//! Turns the Atom document served by the feed proxy into an ordered list of
//! [`VideoEntry`] records. Missing fields degrade to empty strings; only a
//! document that is not well-formed XML is reported as an error.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::{Result, ShowcaseError};
use crate::youtube::types::{VideoEntry, MEDIA_NAMESPACE};

/// Decode every `entry` element of a feed document, in document order.
pub fn decode(xml: &str) -> Result<Vec<VideoEntry>> {
    let mut reader = NsReader::from_str(xml);
    let mut state = DecodeState::default();

    loop {
        let (ns, event) = match reader.read_resolved_event() {
            Ok(resolved) => resolved,
            Err(e) => return Err(parse_error(reader.buffer_position(), e)),
        };
        let in_media_ns = matches!(ns, ResolveResult::Bound(Namespace(n)) if n == MEDIA_NAMESPACE);

        match event {
            Event::Start(e) => state.open_element(&e, in_media_ns, false)?,
            Event::Empty(e) => state.open_element(&e, in_media_ns, true)?,
            Event::End(_) => state.close_element()?,
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| parse_error(reader.buffer_position(), e))?;
                state.text(&text)?;
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e);
                state.cdata(&text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    state.finish()
}

fn parse_error(position: impl std::fmt::Display, err: impl std::fmt::Display) -> ShowcaseError {
    ShowcaseError::Parse(format!("XML error at position {position}: {err}"))
}

/// Field whose text content is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    Title,
    Description,
    Published,
}

/// Text collection in progress for one field of one open entry.
#[derive(Debug)]
struct Capture {
    /// Position of the owning entry on the open-entry stack.
    slot: usize,
    field: TextField,
    /// Depth of the element whose text is collected.
    depth: usize,
    text: String,
}

/// Fields collected so far for an entry; `None` means not seen yet.
#[derive(Debug, Default)]
struct EntryBuilder {
    title: Option<String>,
    description: Option<String>,
    thumbnail_url: Option<String>,
    page_url: Option<String>,
    published_at: Option<String>,
}

impl EntryBuilder {
    fn slot(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::Title => &mut self.title,
            TextField::Description => &mut self.description,
            TextField::Published => &mut self.published_at,
        }
    }

    fn build(self) -> VideoEntry {
        VideoEntry {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            page_url: self.page_url.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
        }
    }
}

/// An `entry` element whose end tag has not been seen yet.
#[derive(Debug)]
struct OpenEntry {
    /// Output position, fixed at the start tag so nesting keeps document order.
    index: usize,
    depth: usize,
    /// Depth of the media group while it is open.
    group_depth: Option<usize>,
    group_seen: bool,
    fields: EntryBuilder,
}

#[derive(Debug, Default)]
struct DecodeState {
    depth: usize,
    root_seen: bool,
    entries: Vec<Option<VideoEntry>>,
    open: Vec<OpenEntry>,
    capture: Option<Capture>,
}

impl DecodeState {
    fn open_element(&mut self, e: &BytesStart<'_>, in_media_ns: bool, empty: bool) -> Result<()> {
        if self.depth == 0 {
            if self.root_seen {
                return Err(ShowcaseError::Parse(
                    "document has more than one root element".to_string(),
                ));
            }
            self.root_seen = true;
        }

        let depth = self.depth + 1;
        let local = e.local_name();
        let name = local.as_ref();

        if name == b"entry" && !in_media_ns {
            let index = self.entries.len();
            self.entries.push(None);
            if empty {
                self.entries[index] = Some(VideoEntry::default());
            } else {
                self.open.push(OpenEntry {
                    index,
                    depth,
                    group_depth: None,
                    group_seen: false,
                    fields: EntryBuilder::default(),
                });
            }
        } else if let Some(slot) = self.open.len().checked_sub(1) {
            self.entry_child(slot, e, name, depth, in_media_ns, empty)?;
        }

        if !empty {
            self.depth = depth;
        }
        Ok(())
    }

    fn entry_child(
        &mut self,
        slot: usize,
        e: &BytesStart<'_>,
        name: &[u8],
        depth: usize,
        in_media_ns: bool,
        empty: bool,
    ) -> Result<()> {
        let capturing = self.capture.is_some();
        let entry = &mut self.open[slot];
        let mut start_capture = None;

        if depth == entry.depth + 1 {
            match (name, in_media_ns) {
                (b"title", false) if entry.fields.title.is_none() && !capturing => {
                    start_capture = Some(TextField::Title);
                }
                (b"published", false) if entry.fields.published_at.is_none() && !capturing => {
                    start_capture = Some(TextField::Published);
                }
                (b"link", false) if entry.fields.page_url.is_none() => {
                    entry.fields.page_url = Some(attribute(e, b"href")?.unwrap_or_default());
                }
                (b"group", true) if !entry.group_seen => {
                    entry.group_seen = true;
                    if !empty {
                        entry.group_depth = Some(depth);
                    }
                }
                _ => {}
            }
        } else if entry.group_depth.is_some_and(|group| depth > group) && in_media_ns {
            match name {
                b"description" if entry.fields.description.is_none() && !capturing => {
                    start_capture = Some(TextField::Description);
                }
                b"thumbnail" if entry.fields.thumbnail_url.is_none() => {
                    entry.fields.thumbnail_url = Some(attribute(e, b"url")?.unwrap_or_default());
                }
                _ => {}
            }
        }

        if let Some(field) = start_capture {
            if empty {
                *entry.fields.slot(field) = Some(String::new());
            } else {
                self.capture = Some(Capture {
                    slot,
                    field,
                    depth,
                    text: String::new(),
                });
            }
        }
        Ok(())
    }

    fn close_element(&mut self) -> Result<()> {
        let depth = self.depth;
        if depth == 0 {
            return Err(ShowcaseError::Parse("unexpected end tag".to_string()));
        }

        if self.capture.as_ref().is_some_and(|c| c.depth == depth) {
            if let Some(capture) = self.capture.take() {
                *self.open[capture.slot].fields.slot(capture.field) = Some(capture.text);
            }
        }

        if let Some(entry) = self.open.last_mut() {
            if entry.group_depth == Some(depth) {
                entry.group_depth = None;
            }
            if entry.depth == depth {
                if let Some(entry) = self.open.pop() {
                    self.entries[entry.index] = Some(entry.fields.build());
                }
            }
        }

        self.depth = depth - 1;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        if self.depth == 0 {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(ShowcaseError::Parse(
                "text content outside of the root element".to_string(),
            ));
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
        Ok(())
    }

    fn cdata(&mut self, text: &str) -> Result<()> {
        if self.depth == 0 {
            return Err(ShowcaseError::Parse(
                "CDATA section outside of the root element".to_string(),
            ));
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.text.push_str(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<VideoEntry>> {
        if !self.root_seen {
            return Err(ShowcaseError::Parse(
                "document has no root element".to_string(),
            ));
        }
        if self.depth != 0 {
            return Err(ShowcaseError::Parse(format!(
                "unexpected end of document: {} element(s) left open",
                self.depth
            )));
        }
        Ok(self.entries.into_iter().flatten().collect())
    }
}

/// Value of an unprefixed attribute, if present.
fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ShowcaseError::Parse(format!("malformed attribute: {e}")))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|e| ShowcaseError::Parse(format!("malformed attribute value: {e}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">"#;

    fn feed(entries: &str) -> String {
        format!("{FEED_HEADER}\n<title>Channel</title>\n{entries}\n</feed>")
    }

    fn full_entry(n: usize) -> String {
        format!(
            r#"<entry>
  <id>yt:video:{n}</id>
  <title>Video {n}</title>
  <link rel="alternate" href="https://www.youtube.com/watch?v={n}"/>
  <published>2024-01-0{n}T00:00:00+00:00</published>
  <media:group>
    <media:title>Video {n}</media:title>
    <media:thumbnail url="https://i.ytimg.com/vi/{n}/hqdefault.jpg" width="480" height="360"/>
    <media:description>Description {n}</media:description>
  </media:group>
</entry>"#
        )
    }

    #[test]
    fn test_decode_single_entry() {
        let xml = feed(
            r#"<entry>
  <title>T</title>
  <link href="https://x/y"/>
  <published>2024-01-01T00:00:00Z</published>
  <media:group>
    <media:description>D</media:description>
    <media:thumbnail url="https://x/thumb.jpg"/>
  </media:group>
</entry>"#,
        );

        let videos = decode(&xml).unwrap();
        assert_eq!(
            videos,
            vec![VideoEntry {
                title: "T".to_string(),
                description: "D".to_string(),
                thumbnail_url: "https://x/thumb.jpg".to_string(),
                page_url: "https://x/y".to_string(),
                published_at: "2024-01-01T00:00:00Z".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_preserves_order_and_count() {
        let entries: String = (1..=5).map(full_entry).collect();
        let videos = decode(&feed(&entries)).unwrap();

        assert_eq!(videos.len(), 5);
        for (i, video) in videos.iter().enumerate() {
            let n = i + 1;
            assert_eq!(video.title, format!("Video {n}"));
            assert_eq!(video.page_url, format!("https://www.youtube.com/watch?v={n}"));
            assert_eq!(video.description, format!("Description {n}"));
            assert_eq!(
                video.thumbnail_url,
                format!("https://i.ytimg.com/vi/{n}/hqdefault.jpg")
            );
            assert_eq!(video.published_at, format!("2024-01-0{n}T00:00:00+00:00"));
        }
    }

    #[test]
    fn test_decode_duplicate_entries_kept() {
        let entries = format!("{}{}", full_entry(1), full_entry(1));
        let videos = decode(&feed(&entries)).unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0], videos[1]);
    }

    #[test]
    fn test_decode_missing_link() {
        let xml = feed("<entry><title>No link</title></entry>");
        let videos = decode(&xml).unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "No link");
        assert_eq!(videos[0].page_url, "");
    }

    #[test]
    fn test_decode_link_without_href() {
        let xml = feed(r#"<entry><link rel="alternate"/><link href="https://second"/></entry>"#);
        let videos = decode(&xml).unwrap();
        assert_eq!(videos[0].page_url, "");
    }

    #[test]
    fn test_decode_empty_entry() {
        let videos = decode(&feed("<entry></entry><entry/>")).unwrap();
        assert_eq!(videos, vec![VideoEntry::default(), VideoEntry::default()]);
    }

    #[test]
    fn test_decode_missing_group() {
        let xml = feed(
            r#"<entry>
  <title>T</title>
  <published>2024-01-01T00:00:00Z</published>
</entry>"#,
        );
        let videos = decode(&xml).unwrap();

        assert_eq!(videos[0].title, "T");
        assert_eq!(videos[0].description, "");
        assert_eq!(videos[0].thumbnail_url, "");
        assert_eq!(videos[0].published_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_decode_group_without_description() {
        let xml = feed(
            r#"<entry><media:group><media:thumbnail url="https://x/t.jpg"/></media:group></entry>"#,
        );
        let videos = decode(&xml).unwrap();
        assert_eq!(videos[0].description, "");
        assert_eq!(videos[0].thumbnail_url, "https://x/t.jpg");
    }

    #[test]
    fn test_decode_group_outside_media_namespace_ignored() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
<entry><group><description>plain</description><thumbnail url="u"/></group></entry>
</feed>"#;
        let videos = decode(xml).unwrap();
        assert_eq!(videos[0].description, "");
        assert_eq!(videos[0].thumbnail_url, "");
    }

    #[test]
    fn test_decode_media_prefix_bound_to_other_name() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:m="http://search.yahoo.com/mrss/">
<entry><m:group><m:description>D</m:description></m:group></entry>
</feed>"#;
        let videos = decode(xml).unwrap();
        assert_eq!(videos[0].description, "D");
    }

    #[test]
    fn test_decode_media_title_not_used_as_title() {
        let xml = feed(
            r#"<entry><media:group><media:title>Media title</media:title></media:group></entry>"#,
        );
        let videos = decode(&xml).unwrap();
        assert_eq!(videos[0].title, "");
    }

    #[test]
    fn test_decode_first_title_wins() {
        let xml = feed("<entry><title>First</title><title>Second</title></entry>");
        let videos = decode(&xml).unwrap();
        assert_eq!(videos[0].title, "First");
    }

    #[test]
    fn test_decode_entities_and_cdata() {
        let xml = feed(
            r#"<entry>
  <title>Rock &amp; Roll &#65;</title>
  <link href="https://x/watch?v=1&amp;t=2"/>
  <media:group><media:description><![CDATA[<b>bold</b>]]> tail</media:description></media:group>
</entry>"#,
        );
        let videos = decode(&xml).unwrap();

        assert_eq!(videos[0].title, "Rock & Roll A");
        assert_eq!(videos[0].page_url, "https://x/watch?v=1&t=2");
        assert_eq!(videos[0].description, "<b>bold</b> tail");
    }

    #[test]
    fn test_decode_text_not_trimmed() {
        let xml = feed("<entry><title> spaced </title></entry>");
        let videos = decode(&xml).unwrap();
        assert_eq!(videos[0].title, " spaced ");
    }

    #[test]
    fn test_decode_entries_at_any_depth() {
        let xml = r#"<root><wrapper><entry><title>Deep</title></entry></wrapper><entry><title>Shallow</title></entry></root>"#;
        let videos = decode(xml).unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Deep");
        assert_eq!(videos[1].title, "Shallow");
    }

    #[test]
    fn test_decode_nested_entry_keeps_start_order() {
        let xml = r#"<feed><entry><title>Outer</title><entry><title>Inner</title></entry></entry></feed>"#;
        let videos = decode(xml).unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Outer");
        assert_eq!(videos[1].title, "Inner");
    }

    #[test]
    fn test_decode_empty_feed() {
        assert!(decode("<feed></feed>").unwrap().is_empty());
        assert!(decode(&feed("")).unwrap().is_empty());
    }

    #[test]
    fn test_decode_not_xml() {
        let result = decode("not xml");
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(matches!(decode(""), Err(ShowcaseError::Parse(_))));
        assert!(matches!(decode("   \n"), Err(ShowcaseError::Parse(_))));
    }

    #[test]
    fn test_decode_unclosed_element() {
        let result = decode("<feed><entry><title>T</title>");
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }

    #[test]
    fn test_decode_mismatched_tags() {
        let result = decode("<feed><entry></feed></entry>");
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }

    #[test]
    fn test_decode_multiple_roots() {
        let result = decode("<feed></feed><feed></feed>");
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }

    #[test]
    fn test_decode_html_error_page() {
        let result = decode("<html><body><p>Service Unavailable</body></html>");
        assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    }
}
