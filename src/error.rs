//! Error types for showcase.

use thiserror::Error;

/// Common error type for showcase.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Upstream feed could not be fetched.
    ///
    /// Covers transport failures as well as non-success HTTP statuses.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Payload is not well-formed XML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Contact form relay failed.
    #[error("contact relay error: {0}")]
    Contact(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
