//! Payment SDK seam.
//!
//! The storefront never handles raw card data. Card details live in the SDK's
//! embedded input widget; the core only passes an opaque reference to that
//! widget back to the SDK and receives an opaque payment-method id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CommerceError, TokenizationError};
use crate::ids::PaymentMethodId;

/// Prefix every publishable key carries.
pub const PUBLISHABLE_KEY_PREFIX: &str = "pk_";

/// The SDK's public, non-secret key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublishableKey(String);

impl PublishableKey {
    /// Validate and wrap a key.
    pub fn parse(key: &str) -> Result<Self, CommerceError> {
        let key = key.trim();
        if key.len() <= PUBLISHABLE_KEY_PREFIX.len() || !key.starts_with(PUBLISHABLE_KEY_PREFIX) {
            return Err(CommerceError::InvalidPublishableKey(format!(
                "expected a key starting with {PUBLISHABLE_KEY_PREFIX:?}"
            )));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(CommerceError::InvalidPublishableKey(
                "key contains whitespace".to_string(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a test-mode key.
    pub fn is_test_mode(&self) -> bool {
        self.0.starts_with("pk_test_")
    }
}

impl TryFrom<String> for PublishableKey {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PublishableKey> for String {
    fn from(key: PublishableKey) -> Self {
        key.0
    }
}

/// Result of one tokenization attempt. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The SDK created a payment method.
    Succeeded(PaymentMethodId),
    /// The SDK rejected the card or the call failed.
    Failed(TokenizationError),
}

/// An initialized payment SDK handle.
#[async_trait(?Send)]
pub trait PaymentGateway {
    /// Opaque reference to the SDK's card input widget.
    type CardInput;

    /// Ask the hosted service to turn the widget's card details into a payment method.
    async fn create_payment_method(
        &self,
        card: &Self::CardInput,
    ) -> Result<PaymentMethodId, TokenizationError>;
}

/// The payment SDK before initialization.
pub trait PaymentSdk {
    type Gateway: PaymentGateway;

    /// Initialize with a publishable key. `None` while the SDK is still loading.
    fn initialize(&self, key: &PublishableKey) -> Option<Self::Gateway>;
}

/// Receives the user-visible success indication.
pub trait PaymentNotifier {
    /// Called exactly once per successful submission.
    fn payment_method_created(&self, id: &PaymentMethodId);
}

impl<F> PaymentNotifier for F
where
    F: Fn(&PaymentMethodId),
{
    fn payment_method_created(&self, id: &PaymentMethodId) {
        self(id)
    }
}
