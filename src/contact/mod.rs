//! Contact form module.
//!
//! Validation rules, per-form state, and the client relaying submissions to
//! the third-party form relay.

pub mod client;
pub mod form;
pub mod types;

pub use client::ContactClient;
pub use form::{ContactForm, ContactStatus};
pub use types::{is_plausible_email, ContactField, ContactSubmission};
