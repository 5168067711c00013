//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Publishable key is missing or malformed.
    #[error("Invalid publishable key: {0}")]
    InvalidPublishableKey(String),

    /// A form field failed validation.
    #[error("Validation error on {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl CommerceError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CommerceError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure returned by the payment SDK when creating a payment method.
///
/// This is the only external failure the storefront handles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// Card input was rejected (incomplete number, declined, expired...).
    #[error("Card error ({code}): {message}")]
    Card { code: String, message: String },

    /// The call to the hosted endpoint failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The SDK answered with something we could not interpret.
    #[error("Payment SDK error: {0}")]
    Sdk(String),
}

impl TokenizationError {
    /// Create a card error.
    pub fn card(code: impl Into<String>, message: impl Into<String>) -> Self {
        TokenizationError::Card {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Short message suitable for showing under the pay button.
    pub fn user_message(&self) -> &str {
        match self {
            TokenizationError::Card { message, .. } => message,
            TokenizationError::Network(_) => {
                "We couldn't reach the payment service. Please try again."
            }
            TokenizationError::Sdk(_) => {
                "Something went wrong with the payment form. Please try again."
            }
        }
    }
}
