//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The boutique works with a fixed set of categories; the filter control lists
/// them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Outerwear,
    Accessories,
    Dresses,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Outerwear, Category::Accessories, Category::Dresses];

    /// Display label, also used as the filter option value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Outerwear => "Outerwear",
            Category::Accessories => "Accessories",
            Category::Dresses => "Dresses",
        }
    }

    /// The category whose label is exactly `s`.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
