//! StoreApp setup.

use std::sync::Arc;

use boutique_commerce::catalog::Catalog;
use boutique_commerce::shop::ShopState;
use boutique_observability::{LogSink, SessionId, StructuredLogger};

use crate::config::StoreConfig;
use crate::content::StorePage;
use crate::error::ConfigError;

/// Builder for a storefront session.
///
/// # Example
///
/// ```rust
/// use boutique_core::{StoreApp, StoreConfig};
///
/// let session = StoreApp::new(StoreConfig::default()).build().unwrap();
/// assert_eq!(session.shop.visible_products().len(), 3);
/// assert_eq!(session.page.store_name, "Golden Sass Boutique");
/// ```
pub struct StoreApp {
    config: StoreConfig,
    catalog: Catalog,
    session_id: Option<SessionId>,
    sink: Option<Arc<dyn LogSink>>,
}

impl StoreApp {
    /// Start from a configuration and the boutique catalog.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            catalog: Catalog::boutique(),
            session_id: None,
            sink: None,
        }
    }

    /// Use a different catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a fixed session id instead of a generated one.
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Send log entries to `sink`.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Validate the configuration and assemble the session.
    pub fn build(self) -> Result<StoreSession, ConfigError> {
        self.config.validate()?;

        let mut logger = StructuredLogger::new(self.session_id.unwrap_or_else(SessionId::generate))
            .with_min_level(self.config.logging.level)
            .with_format(self.config.logging.format);
        if let Some(sink) = self.sink {
            logger = logger.with_shared_sink(sink);
        }

        logger
            .info_builder("storefront session started")
            .field("store", self.config.store.name.clone())
            .field_i64("products", self.catalog.len() as i64)
            .field_bool("test_mode", self.config.publishable_key()?.is_test_mode())
            .emit();

        let shop = ShopState::new(self.catalog, &logger);
        let page = StorePage::new(
            self.config.store.name.clone(),
            self.config.store.tagline.clone(),
        );

        Ok(StoreSession {
            config: self.config,
            logger,
            shop,
            page,
        })
    }
}

/// Everything one page load needs.
#[derive(Debug, Clone)]
pub struct StoreSession {
    pub config: StoreConfig,
    pub logger: StructuredLogger,
    pub shop: ShopState,
    pub page: StorePage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_commerce::catalog::{Category, Product};
    use boutique_commerce::{Money, ProductId};
    use boutique_observability::{LogLevel, MemorySink};

    #[test]
    fn test_build_default_session() {
        let sink = MemorySink::new();
        let session = StoreApp::new(StoreConfig::default())
            .with_session_id(SessionId::from_string("sess-42"))
            .with_sink(sink.clone())
            .build()
            .unwrap();

        assert_eq!(session.logger.session_id().as_str(), "sess-42");
        assert!(session.shop.cart().is_empty());
        assert_eq!(session.page.tagline, "Today's Western Fashion");

        let started = sink.at_level(LogLevel::Info);
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].field("test_mode"), Some(&true.into()));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![Product::new(
            "Silver Spur Earrings",
            Money::usd(2500),
            Category::Accessories,
        )]);
        let session = StoreApp::new(StoreConfig::default())
            .with_catalog(catalog)
            .build()
            .unwrap();
        assert_eq!(session.shop.catalog().len(), 1);
    }

    #[test]
    fn test_cart_total_uses_entry_prices() {
        let mut session = StoreApp::new(StoreConfig::default()).build().unwrap();
        session.shop.add_to_cart(&ProductId::new("turquoise-concho-belt"));

        let cart = session.shop.cart();
        assert_eq!(cart.entries()[0].summary_line(), "Turquoise Concho Belt - $44.00");
        assert_eq!(cart.total(), cart.entries()[0].price);
        assert_eq!(session.shop.checkout_summary().pay_label(), "Pay $44.00");
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let config = StoreConfig::default().with_publishable_key("not-a-key");
        assert!(StoreApp::new(config).build().is_err());
    }

    #[test]
    fn test_log_level_from_config() {
        let sink = MemorySink::new();
        let config = StoreConfig::default().with_log_level(LogLevel::Warn);
        let session = StoreApp::new(config).with_sink(sink.clone()).build().unwrap();
        session.logger.info("hidden");
        assert!(sink.entries().is_empty());
    }
}
