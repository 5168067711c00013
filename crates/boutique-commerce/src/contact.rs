//! Contact form.
//!
//! The page collects a name, email, and message. There is no endpoint to send
//! them to; a validated message is handed back to the caller to log and
//! acknowledge.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Longest accepted message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Acknowledgement shown after sending.
    pub fn acknowledgement(&self) -> String {
        format!("Thanks, {}! We'll be in touch soon.", self.name)
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field; the first failure wins.
    pub fn validate(&self) -> Result<ContactMessage, CommerceError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        validate_email(email)?;
        let message = required("message", &self.message)?;
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(CommerceError::validation(
                "message",
                format!("must be at most {MAX_MESSAGE_CHARS} characters"),
            ));
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CommerceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommerceError::validation(field, "is required"));
    }
    Ok(value)
}

fn validate_email(email: &str) -> Result<(), CommerceError> {
    let invalid = || CommerceError::validation("email", "is not a valid email address");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let mut labels = domain.split('.');
    let dotted = domain.contains('.');
    if !dotted || labels.any(str::is_empty) {
        return Err(invalid());
    }
    Ok(())
}
