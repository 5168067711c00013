//! Golden Sass Boutique storefront.
//!
//! The browser app only exists with `--features web` on a wasm32 target. Other
//! builds get the embedded configuration and Stripe error mapping, which are
//! plain Rust and tested natively.

pub mod sdk_error;
pub mod sdk_retry;
pub mod settings;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
