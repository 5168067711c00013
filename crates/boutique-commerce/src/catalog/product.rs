//! Product records and the static catalog.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are defined once when the catalog is built and never change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Stable identifier derived from the title.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Category used by the filter.
    pub category: Category,
}

impl Product {
    /// Create a product; the id is derived from the title.
    pub fn new(title: impl Into<String>, price: Money, category: Category) -> Self {
        let title = title.into();
        Self {
            id: ProductId::from_title(&title),
            title,
            price,
            category,
        }
    }

    /// Formatted price (e.g., "$68.00").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

/// The fixed, in-memory product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a fixed list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The boutique's current arrivals.
    pub fn boutique() -> Self {
        Self::new(vec![
            Product::new("Fringe Denim Jacket", Money::usd(6800), Category::Outerwear),
            Product::new("Turquoise Concho Belt", Money::usd(4400), Category::Accessories),
            Product::new("Boho Western Dress", Money::usd(7200), Category::Dresses),
        ])
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boutique_catalog() {
        let catalog = Catalog::boutique();
        assert_eq!(catalog.len(), 3);

        let titles: Vec<_> = catalog.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Fringe Denim Jacket", "Turquoise Concho Belt", "Boho Western Dress"]
        );
        assert_eq!(catalog.products()[1].price_display(), "$44.00");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::boutique();
        let belt = catalog.get(&ProductId::new("turquoise-concho-belt")).unwrap();
        assert_eq!(belt.category, Category::Accessories);
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get(&ProductId::new("fringe-denim-jacket")).is_none());
    }
}
