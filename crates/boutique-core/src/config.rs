//! Store configuration.
//!
//! ```toml
//! [store]
//! name = "Golden Sass Boutique"
//! tagline = "Today's Western Fashion"
//!
//! [payment]
//! publishable_key = "pk_test_12345"
//! tokenization_timeout_ms = 30000
//!
//! [logging]
//! level = "info"
//! format = "human"
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use boutique_commerce::checkout::PublishableKey;
use boutique_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the build-time variable that overrides the publishable key.
pub const PUBLISHABLE_KEY_ENV: &str = "BOUTIQUE_PUBLISHABLE_KEY";

/// Top-level store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreSection,

    /// Payment SDK settings.
    #[serde(default)]
    pub payment: PaymentSection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[store]` section. Prices are always US dollars, so there is no currency key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    pub name: String,
    pub tagline: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "Golden Sass Boutique".to_string(),
            tagline: "Today's Western Fashion".to_string(),
        }
    }
}

/// `[payment]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSection {
    /// Public, non-secret SDK key.
    pub publishable_key: String,
    /// Give up on a pending tokenization after this long. 0 waits forever.
    #[serde(default)]
    pub tokenization_timeout_ms: u64,
}

impl Default for PaymentSection {
    fn default() -> Self {
        Self {
            publishable_key: "pk_test_12345".to_string(),
            tokenization_timeout_ms: 0,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}

impl StoreConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config: {}", path))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "store.name",
                reason: "must not be empty".to_string(),
            });
        }
        self.publishable_key()?;
        Ok(())
    }

    /// The validated publishable key.
    pub fn publishable_key(&self) -> Result<PublishableKey, ConfigError> {
        Ok(PublishableKey::parse(&self.payment.publishable_key)?)
    }

    /// Tokenization timeout, if one is configured.
    pub fn tokenization_timeout(&self) -> Option<Duration> {
        match self.payment.tokenization_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Replace the publishable key when an override is present and non-empty.
    pub fn with_key_override(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
            self.payment.publishable_key = key.to_string();
        }
        self
    }

    /// Set the store name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.store.name = name.into();
        self
    }

    /// Set the publishable key.
    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.payment.publishable_key = key.into();
        self
    }

    /// Set the tokenization timeout.
    pub fn with_tokenization_timeout(mut self, timeout: Duration) -> Self {
        self.payment.tokenization_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the minimum log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.logging.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.store.name, "Golden Sass Boutique");
        assert_eq!(config.payment.publishable_key, "pk_test_12345");
        assert!(config.tokenization_timeout().is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_document() {
        let config = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "Golden Sass Boutique"
            tagline = "Today's Western Fashion"

            [payment]
            publishable_key = "pk_test_abc"
            tokenization_timeout_ms = 30000

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.publishable_key().unwrap().as_str(), "pk_test_abc");
        assert_eq!(config.tokenization_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            [payment]
            publishable_key = "pk_live_xyz"
            "#,
        )
        .unwrap();
        assert_eq!(config.store, StoreSection::default());
        assert_eq!(config.payment.tokenization_timeout_ms, 0);
    }

    #[test]
    fn test_rejects_secret_key() {
        let err = StoreConfig::from_toml_str(
            r#"
            [payment]
            publishable_key = "sk_test_do_not_ship"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Commerce(_)));
    }

    #[test]
    fn test_rejects_currency_key() {
        let err = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "Golden Sass Boutique"
            tagline = "Today's Western Fashion"
            currency = "EUR"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("currency"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = StoreConfig::default().with_name("  ").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "store.name", .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = StoreConfig::from_toml_str("[payment\npublishable_key = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_key_override() {
        let config = StoreConfig::default().with_key_override(Some("pk_live_123"));
        assert_eq!(config.payment.publishable_key, "pk_live_123");

        let config = StoreConfig::default().with_key_override(Some("  "));
        assert_eq!(config.payment.publishable_key, "pk_test_12345");

        let config = StoreConfig::default().with_key_override(None);
        assert_eq!(config.payment.publishable_key, "pk_test_12345");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StoreConfig::default()
            .with_tokenization_timeout(Duration::from_secs(20))
            .with_log_level(LogLevel::Warn);
        let text = config.to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/definitely/not/here/boutique.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
