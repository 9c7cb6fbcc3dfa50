//! Contact form types and validation rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form field name, as submitted to the relay.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// A contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email address.
    #[serde(default)]
    pub email: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Honeypot checkbox; real visitors never tick it.
    #[serde(default)]
    pub botcheck: bool,
}

impl ContactSubmission {
    /// Value of a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable value of a field.
    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// First failing rule per field.
    pub fn field_errors(&self) -> BTreeMap<ContactField, ValidationError> {
        let mut errors = BTreeMap::new();

        if let Err(e) = required(&self.name, "Name is required") {
            errors.insert(ContactField::Name, e);
        }

        if let Err(e) = required(&self.email, "Email is required").and_then(|_| email(&self.email))
        {
            errors.insert(ContactField::Email, e);
        }

        if let Err(e) = required(&self.message, "Message is required") {
            errors.insert(ContactField::Message, e);
        }

        errors
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, error) in self.field_errors() {
            errors.add(field.key(), error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Validate that a value is not empty after trimming whitespace.
fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(message.into()));
    }
    Ok(())
}

/// Validate the `local@domain.tld` shape of an email address.
fn email(value: &str) -> Result<(), ValidationError> {
    if !is_plausible_email(value) {
        return Err(ValidationError::new("email").with_message("Please enter a valid email".into()));
    }
    Ok(())
}

/// Check an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// a dot that has at least one character on each side.
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
