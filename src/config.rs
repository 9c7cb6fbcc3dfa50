//! Configuration module for showcase.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, ShowcaseError};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Rate limit for the contact endpoint (requests per minute).
    #[serde(default = "default_contact_rate_limit")]
    pub contact_rate_limit: u32,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8080
}

fn default_contact_rate_limit() -> u32 {
    5 // 5 requests per minute
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
            contact_rate_limit: default_contact_rate_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/showcase.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// YouTube feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeConfig {
    /// Channel whose uploads feed is relayed.
    #[serde(default = "default_channel_id")]
    pub channel_id: String,
    /// Feed endpoint; the channel id is appended as a query parameter.
    #[serde(default = "default_feed_base_url")]
    pub feed_base_url: String,
    /// `max-age` advertised on relayed feed responses, in seconds.
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,
    /// Maximum upstream body size in bytes.
    #[serde(default = "default_max_feed_size")]
    pub max_feed_size_bytes: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
}

fn default_channel_id() -> String {
    "UCQgkI83Fwlh4ncl_4tK6dSg".to_string()
}

fn default_feed_base_url() -> String {
    "https://www.youtube.com/feeds/videos.xml".to_string()
}

fn default_cache_max_age() -> u64 {
    3600 // 1 hour
}

fn default_max_feed_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_total_timeout() -> u64 {
    30
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            channel_id: default_channel_id(),
            feed_base_url: default_feed_base_url(),
            cache_max_age_secs: default_cache_max_age(),
            max_feed_size_bytes: default_max_feed_size(),
            connect_timeout_secs: default_connect_timeout(),
            total_timeout_secs: default_total_timeout(),
        }
    }
}

impl YoutubeConfig {
    /// Full upstream feed URL for the configured channel.
    pub fn feed_url(&self) -> Result<url::Url> {
        url::Url::parse_with_params(&self.feed_base_url, &[("channel_id", &self.channel_id)])
            .map_err(|e| ShowcaseError::Config(format!("invalid feed_base_url: {e}")))
    }

    /// Public channel page, used as the fallback link when the feed is unavailable.
    pub fn channel_page_url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.channel_id)
    }
}

/// Contact form relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Form relay submission endpoint.
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    /// Access key sent with every submission.
    #[serde(default)]
    pub access_key: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub timeout_secs: u64,
}

fn default_contact_endpoint() -> String {
    "https://api.web3forms.com/submit".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            access_key: String::new(),
            timeout_secs: default_total_timeout(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// YouTube feed configuration.
    #[serde(default)]
    pub youtube: YoutubeConfig,
    /// Contact form relay configuration.
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ShowcaseError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ShowcaseError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SHOWCASE_WEB3FORMS_ACCESS_KEY`: Override the contact relay access key
    pub fn apply_env_overrides(&mut self) {
        if let Ok(access_key) = std::env::var("SHOWCASE_WEB3FORMS_ACCESS_KEY") {
            if !access_key.is_empty() {
                self.contact.access_key = access_key;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The channel id is empty
    /// - The feed URL or the contact endpoint is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.youtube.channel_id.trim().is_empty() {
            return Err(ShowcaseError::Config(
                "youtube.channel_id must not be empty".to_string(),
            ));
        }

        let feed_url = self.youtube.feed_url()?;
        check_http_scheme("youtube.feed_base_url", &feed_url)?;

        let endpoint = url::Url::parse(&self.contact.endpoint)
            .map_err(|e| ShowcaseError::Config(format!("invalid contact.endpoint: {e}")))?;
        check_http_scheme("contact.endpoint", &endpoint)?;

        if self.contact.access_key.is_empty() {
            tracing::warn!(
                "contact.access_key is not set; submissions will be rejected by the relay. \
                 Set it in config.toml or via SHOWCASE_WEB3FORMS_ACCESS_KEY."
            );
        }

        Ok(())
    }
}

fn check_http_scheme(field: &str, url: &url::Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ShowcaseError::Config(format!(
            "{field}: unsupported URL scheme: {scheme}"
        ))),
    }
}
