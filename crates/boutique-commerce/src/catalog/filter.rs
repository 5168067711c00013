//! Category filter for the product grid.

use crate::catalog::{Catalog, Category, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the sentinel option that shows every product.
pub const ALL_LABEL: &str = "All";

/// The selected category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Show the full catalog.
    #[default]
    All,
    /// Show only products in one category.
    Category(Category),
    /// A value the select control produced that names no known category.
    Unrecognized(String),
}

impl CategoryFilter {
    /// Filter for a single category.
    pub fn category(category: Category) -> Self {
        CategoryFilter::Category(category)
    }

    /// Parse a select option value.
    ///
    /// Matching is exact. Anything else is kept as
    /// [`CategoryFilter::Unrecognized`] and matches nothing.
    pub fn parse(value: &str) -> Self {
        if value == ALL_LABEL {
            return CategoryFilter::All;
        }
        match Category::from_label(value) {
            Some(category) => CategoryFilter::Category(category),
            None => CategoryFilter::Unrecognized(value.to_string()),
        }
    }

    /// The select options in display order: "All" then every category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Category))
            .collect()
    }

    /// Option label.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Category(c) => c.label(),
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => product.category == *c,
            CategoryFilter::Unrecognized(_) => false,
        }
    }

    /// Products passing the filter, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
