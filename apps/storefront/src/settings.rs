//! Configuration baked into the storefront bundle.

use boutique_core::{ConfigError, StoreConfig};

/// `boutique.toml`, embedded at build time.
pub const EMBEDDED_CONFIG: &str = include_str!("../boutique.toml");

/// The store configuration for this build.
///
/// The publishable key can be replaced without editing `boutique.toml` by
/// setting `BOUTIQUE_PUBLISHABLE_KEY` (see [`boutique_core::PUBLISHABLE_KEY_ENV`])
/// when compiling.
pub fn store_config() -> Result<StoreConfig, ConfigError> {
    config_with_key_override(option_env!("BOUTIQUE_PUBLISHABLE_KEY"))
}

/// Parse the embedded config and apply a publishable key override.
pub fn config_with_key_override(key: Option<&str>) -> Result<StoreConfig, ConfigError> {
    let config = StoreConfig::from_toml_str(EMBEDDED_CONFIG)?.with_key_override(key);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = config_with_key_override(None).unwrap();
        assert_eq!(config.store.name, "Golden Sass Boutique");
        assert_eq!(config.payment.publishable_key, "pk_test_12345");
        assert_eq!(config.tokenization_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_override_replaces_key() {
        let config = config_with_key_override(Some("pk_live_boutique")).unwrap();
        assert!(!config.publishable_key().unwrap().is_test_mode());
    }

    #[test]
    fn test_bad_override_is_rejected() {
        assert!(config_with_key_override(Some("sk_live_secret")).is_err());
    }
}
