//! Form relay client.
//!
//! Submissions are posted as url-encoded form fields together with the site's
//! access key. The relay answers with JSON whose `success` flag is the only
//! thing inspected.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::ContactConfig;
use crate::contact::types::{ContactField, ContactSubmission};
use crate::error::{Result, ShowcaseError};

/// Relay response body.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the third-party form relay.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: String,
    access_key: String,
}

impl ContactClient {
    /// Create a client from the contact configuration.
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShowcaseError::Contact(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
        })
    }

    /// Form fields sent to the relay for a submission.
    fn form_fields<'a>(&'a self, submission: &'a ContactSubmission) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![("access_key", self.access_key.as_str())];
        for field in ContactField::ALL {
            fields.push((field.key(), submission.get(field)));
        }
        if submission.botcheck {
            fields.push(("botcheck", "on"));
        }
        fields
    }

    /// Relay a submission.
    ///
    /// Succeeds only when the relay answers `"success": true`.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&self.form_fields(submission))
            .send()
            .await
            .map_err(|e| ShowcaseError::Contact(format!("failed to reach relay: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ShowcaseError::Contact(format!("failed to read response: {}", e)))?;

        let reply: RelayResponse = serde_json::from_slice(&body).map_err(|e| {
            ShowcaseError::Contact(format!("unexpected relay response (HTTP {}): {}", status, e))
        })?;

        if !reply.success {
            return Err(ShowcaseError::Contact(
                reply
                    .message
                    .unwrap_or_else(|| "relay rejected the submission".to_string()),
            ));
        }

        tracing::info!("Contact form submission relayed");
        Ok(())
    }
}
