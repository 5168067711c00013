//! Mapping Stripe.js failures onto [`TokenizationError`].
//!
//! `createPaymentMethod` resolves to `{ error }` with a `type`, and usually a
//! `code` and `message`. Card and validation errors are the customer's to fix;
//! connection errors are network failures; anything else is reported as an
//! SDK error.

use boutique_commerce::TokenizationError;

const FALLBACK_MESSAGE: &str = "Your card could not be processed.";

/// Build an error from the fields of a Stripe.js `error` object.
pub fn classify(
    kind: Option<&str>,
    code: Option<&str>,
    message: Option<&str>,
) -> TokenizationError {
    let message = message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE);

    match kind {
        Some(kind @ ("card_error" | "validation_error")) => {
            TokenizationError::card(code.unwrap_or(kind), message)
        }
        Some("api_connection_error") => TokenizationError::Network(message.to_string()),
        Some(other) => TokenizationError::Sdk(format!("{other}: {message}")),
        None => TokenizationError::Sdk(message.to_string()),
    }
}

/// The `createPaymentMethod` promise itself rejected.
pub fn rejected(reason: &str) -> TokenizationError {
    TokenizationError::Network(reason.to_string())
}

/// The SDK resolved without an error and without a payment method id.
pub fn missing_payment_method() -> TokenizationError {
    TokenizationError::Sdk("response had neither an error nor a paymentMethod.id".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_errors_keep_code() {
        let err = classify(
            Some("validation_error"),
            Some("incomplete_number"),
            Some("Your card number is incomplete."),
        );
        assert_eq!(
            err,
            TokenizationError::card("incomplete_number", "Your card number is incomplete.")
        );

        let err = classify(Some("card_error"), None, Some("Your card was declined."));
        assert_eq!(err, TokenizationError::card("card_error", "Your card was declined."));
    }

    #[test]
    fn test_connection_error_is_network() {
        let err = classify(Some("api_connection_error"), None, Some("Failed to fetch"));
        assert_eq!(err, TokenizationError::Network("Failed to fetch".to_string()));
    }

    #[test]
    fn test_other_kinds_are_sdk_errors() {
        let err = classify(Some("rate_limit_error"), None, None);
        assert_eq!(
            err,
            TokenizationError::Sdk(format!("rate_limit_error: {FALLBACK_MESSAGE}"))
        );
        assert!(matches!(classify(None, None, Some("  ")), TokenizationError::Sdk(_)));
    }

    #[test]
    fn test_user_messages() {
        let offline = rejected("offline");
        assert_eq!(offline, TokenizationError::Network("offline".to_string()));
        assert_eq!(
            offline.user_message(),
            "We couldn't reach the payment service. Please try again."
        );
        assert!(matches!(missing_payment_method(), TokenizationError::Sdk(_)));
    }
}
