//! Error types for store setup.

use boutique_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while reading or checking the store configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document did not parse.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable.
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The publishable key is malformed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
