//! Checkout module.
//!
//! Contains the checkout summary, the payment SDK seam, and the payment
//! initiation state machine.

mod adapter;
mod payment;
mod summary;

pub use adapter::{PaymentAdapter, PaymentPhase, Submission};
pub use payment::{
    PaymentGateway, PaymentNotifier, PaymentOutcome, PaymentSdk, PublishableKey,
    PUBLISHABLE_KEY_PREFIX,
};
pub use summary::CheckoutSummary;
