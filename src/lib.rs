//! Showcase - backend for a personal showcase site
//!
//! Relays a YouTube channel's Atom feed to the browser, decodes it into
//! video cards, and forwards contact form submissions to a form relay.

pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod web;
pub mod widgets;
pub mod youtube;

pub use config::Config;
pub use contact::{ContactClient, ContactForm, ContactStatus, ContactSubmission};
pub use error::{Result, ShowcaseError};
pub use web::WebServer;
pub use youtube::{decode, FeedClient, FeedFetcher, FeedState, FeedWidget, VideoCard, VideoEntry};
