//! Session state for the storefront page.
//!
//! `ShopState` is the single store the UI reads and writes. It owns the
//! catalog, the selected filter, and the cart; views get read access through
//! the accessors and mutate only through the methods below.

use boutique_observability::StructuredLogger;

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::checkout::CheckoutSummary;
use crate::ids::ProductId;

/// Catalog, filter, and cart for one session.
#[derive(Debug, Clone)]
pub struct ShopState {
    catalog: Catalog,
    filter: CategoryFilter,
    cart: Cart,
    logger: StructuredLogger,
}

impl ShopState {
    /// Start a session over `catalog` with an empty cart and the "All" filter.
    pub fn new(catalog: Catalog, logger: &StructuredLogger) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            cart: Cart::new(),
            logger: logger.for_component("shop"),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Change the selected filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.logger
            .debug_builder("filter changed")
            .field("filter", filter.label())
            .emit();
        self.filter = filter;
    }

    /// Change the filter from a select option value.
    pub fn select_filter(&mut self, value: &str) {
        self.set_filter(CategoryFilter::parse(value));
    }

    /// Products passing the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    /// Add the product with `id` to the cart.
    ///
    /// Returns `None` (and leaves the cart alone) if the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Option<CartEntry> {
        let Some(product) = self.catalog.get(id) else {
            self.logger
                .warn_builder("add to cart ignored: unknown product")
                .field("product", id.as_str())
                .emit();
            return None;
        };
        let entry = self.cart.add(product).clone();
        self.logger
            .info_builder("added to cart")
            .field("product", entry.product_id.as_str())
            .field_i64("cart_len", self.cart.len() as i64)
            .field("cart_total", self.cart.total_display())
            .emit();
        Some(entry)
    }

    /// Fresh checkout summary for the current cart.
    pub fn checkout_summary(&self) -> CheckoutSummary {
        CheckoutSummary::from_cart(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_observability::{LogLevel, MemorySink, SessionId};

    fn shop() -> (ShopState, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(SessionId::from_string("sess"))
            .with_min_level(LogLevel::Debug)
            .with_sink(sink.clone());
        (ShopState::new(Catalog::boutique(), &logger), sink)
    }

    #[test]
    fn test_initial_state() {
        let (shop, _) = shop();
        assert_eq!(shop.filter(), &CategoryFilter::All);
        assert_eq!(shop.visible_products().len(), 3);
        assert!(shop.cart().is_empty());
        assert!(!shop.checkout_summary().is_visible());
    }

    #[test]
    fn test_select_filter() {
        let (mut shop, sink) = shop();
        shop.select_filter("Dresses");
        let visible = shop.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Boho Western Dress");
        assert!(sink.contains("filter changed"));
    }

    #[test]
    fn test_filter_does_not_touch_cart() {
        let (mut shop, _) = shop();
        shop.add_to_cart(&ProductId::new("fringe-denim-jacket"));
        shop.select_filter("Accessories");
        assert_eq!(shop.cart().len(), 1);
        assert_eq!(shop.cart().entries()[0].title, "Fringe Denim Jacket");
    }

    #[test]
    fn test_add_unknown_product() {
        let (mut shop, sink) = shop();
        assert!(shop.add_to_cart(&ProductId::new("cowboy-hat")).is_none());
        assert!(shop.cart().is_empty());
        assert_eq!(sink.at_level(LogLevel::Warn).len(), 1);
    }

    #[test]
    fn test_add_logs_running_total() {
        let (mut shop, sink) = shop();
        shop.add_to_cart(&ProductId::new("turquoise-concho-belt"));
        let info = sink.at_level(LogLevel::Info);
        assert_eq!(info.len(), 1);
        assert_eq!(
            info[0].field("cart_total"),
            Some(&serde_json::json!("$44.00"))
        );
    }
}
