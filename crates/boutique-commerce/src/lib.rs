//! Storefront domain types and logic for the Golden Sass Boutique.
//!
//! This crate holds everything the page does apart from drawing it:
//!
//! - **Catalog**: the fixed product list, categories, and the category filter
//! - **Cart**: append-only cart with totals in integer minor units
//! - **Shop**: the session store the UI reads and writes
//! - **Checkout**: checkout summary and the payment initiation state machine
//! - **Contact**: contact form validation
//!
//! # Example
//!
//! ```rust
//! use boutique_commerce::prelude::*;
//! use boutique_observability::StructuredLogger;
//!
//! let logger = StructuredLogger::quiet();
//! let mut shop = ShopState::new(Catalog::boutique(), &logger);
//!
//! shop.select_filter("Accessories");
//! let belt = shop.visible_products()[0].id.clone();
//!
//! shop.add_to_cart(&belt);
//! shop.add_to_cart(&ProductId::new("boho-western-dress"));
//!
//! assert_eq!(shop.cart().total_display(), "$116.00");
//! assert_eq!(shop.checkout_summary().pay_label(), "Pay $116.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod shop;

pub use error::{CommerceError, TokenizationError};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, TokenizationError};
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartEntry};

    // Shop
    pub use crate::shop::ShopState;

    // Checkout
    pub use crate::checkout::{
        CheckoutSummary, PaymentAdapter, PaymentGateway, PaymentNotifier, PaymentOutcome,
        PaymentPhase, PaymentSdk, PublishableKey, Submission,
    };

    // Contact
    pub use crate::contact::{ContactForm, ContactMessage};
}
