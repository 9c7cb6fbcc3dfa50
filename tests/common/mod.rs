//! Test helpers for web API tests.
//!
//! Stands up local stand-ins for the YouTube feed and the form relay, and
//! builds configurations pointing at them.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use showcase::Config;

/// A small feed with two videos, shaped like the channel feed.
pub const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/" xmlns:yt="http://www.youtube.com/xml/schemas/2015">
  <title>Sample Channel</title>
  <entry>
    <yt:videoId>abc123</yt:videoId>
    <title>First upload</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=abc123"/>
    <published>2024-01-02T10:00:00+00:00</published>
    <media:group>
      <media:title>First upload</media:title>
      <media:thumbnail url="https://i.ytimg.com/vi/abc123/hqdefault.jpg" width="480" height="360"/>
      <media:description>Short description</media:description>
    </media:group>
  </entry>
  <entry>
    <title>Second upload</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=def456"/>
    <published>2024-01-01T10:00:00+00:00</published>
    <media:group>
      <media:thumbnail url="https://i.ytimg.com/vi/def456/hqdefault.jpg"/>
      <media:description>Second description</media:description>
    </media:group>
  </entry>
</feed>"#;

/// Serve `router` on an ephemeral local port.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Configuration whose feed and relay live on `upstream`.
pub fn create_test_config(upstream: SocketAddr) -> Config {
    let mut config = Config::default();
    config.web.host = "127.0.0.1".to_string();
    config.web.port = 0;
    config.web.contact_rate_limit = 100;
    config.youtube.channel_id = "UCtest".to_string();
    config.youtube.feed_base_url = format!("http://{}/feeds/videos.xml", upstream);
    config.youtube.connect_timeout_secs = 2;
    config.youtube.total_timeout_secs = 5;
    config.contact.endpoint = format!("http://{}/submit", upstream);
    config.contact.access_key = "test-access-key".to_string();
    config.contact.timeout_secs = 5;
    config
}
