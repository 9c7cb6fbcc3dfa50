//! Response DTOs for the web API.

use serde::Serialize;

/// Body of the feed proxy's failure response.
#[derive(Debug, Serialize)]
pub struct FeedErrorResponse {
    /// Fixed failure message.
    pub error: &'static str,
}

/// Contact submission result.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Whether the relay accepted the submission.
    pub success: bool,
}
