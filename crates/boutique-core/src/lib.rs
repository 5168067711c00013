//! Golden Sass Boutique store setup.
//!
//! Ties the domain crate to its configuration:
//! - `StoreConfig` - TOML-backed store, payment, and logging settings
//! - `StoreApp` - Builds a `StoreSession` (logger, shop state, page copy)
//! - `StorePage` - Static copy for the header, about, social, and footer sections
//!
//! # Quick Start
//!
//! ```rust
//! use boutique_core::prelude::*;
//!
//! let config = StoreConfig::from_toml_str(
//!     r#"
//!     [payment]
//!     publishable_key = "pk_test_12345"
//!     "#,
//! )
//! .unwrap();
//!
//! let mut session = StoreApp::new(config).build().unwrap();
//! session.shop.add_to_cart(&ProductId::new("fringe-denim-jacket"));
//! assert_eq!(session.shop.checkout_summary().pay_label(), "Pay $68.00");
//! ```

pub mod prelude;
mod app;
mod config;
mod content;
mod error;

pub use app::*;
pub use config::*;
pub use content::*;
pub use error::*;
