//! Contact form state.

use std::collections::BTreeMap;

use crate::contact::client::ContactClient;
use crate::contact::types::{ContactField, ContactSubmission};
use crate::error::Result;

/// Submission status of a contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting for the relay; the submit button is disabled.
    Sending,
    /// The relay accepted the last submission.
    Sent,
    /// The last submission failed.
    Failed,
}

/// Field values, field errors and status of one contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactSubmission,
    errors: BTreeMap<ContactField, String>,
    status: ContactStatus,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    /// Error message shown under a field, if any.
    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Current submission status.
    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Update a field; editing a field clears its error.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Start a submission.
    ///
    /// Returns the submission to relay, or `None` when a submission is already
    /// in flight or validation failed (errors are then recorded per field).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.status == ContactStatus::Sending {
            return None;
        }

        self.errors = self
            .values
            .field_errors()
            .into_iter()
            .map(|(field, error)| {
                let message = error.message.map(|m| m.to_string()).unwrap_or_default();
                (field, message)
            })
            .collect();

        if !self.errors.is_empty() {
            return None;
        }

        self.status = ContactStatus::Sending;
        Some(self.values.clone())
    }

    /// Record the relay outcome of the in-flight submission.
    ///
    /// A success clears every field.
    pub fn finish(&mut self, result: Result<()>) {
        if self.status != ContactStatus::Sending {
            return;
        }

        match result {
            Ok(()) => {
                self.values = ContactSubmission::default();
                self.status = ContactStatus::Sent;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact form submission failed");
                self.status = ContactStatus::Failed;
            }
        }
    }

    /// Validate, relay and record the outcome in one step.
    pub async fn submit(&mut self, client: &ContactClient) -> ContactStatus {
        if let Some(submission) = self.begin_submit() {
            let result = client.submit(&submission).await;
            self.finish(result);
        }
        self.status
    }
}
