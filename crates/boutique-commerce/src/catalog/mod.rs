//! Product catalog module.
//!
//! Contains the static catalog, categories, and the category filter.

mod category;
mod filter;
mod product;

pub use category::Category;
pub use filter::{CategoryFilter, ALL_LABEL};
pub use product::{Catalog, Product};
