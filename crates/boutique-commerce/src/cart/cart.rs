//! Cart and cart entry types.

use crate::catalog::Product;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// The cart is an append-only sequence: every add is a distinct entry, the
/// same product may appear many times, and nothing is removed for the rest of
/// the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    revision: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `product`. Always succeeds.
    pub fn add(&mut self, product: &Product) -> &CartEntry {
        self.entries.push(CartEntry::from_product(product));
        self.revision += 1;
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (the header badge count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped on every mutation so observers can tell the cart changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sum of all entry prices, recomputed on every call.
    ///
    /// Saturates instead of overflowing.
    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::ZERO, |acc, e| acc.saturating_add(e.price))
    }

    /// Total formatted for display (e.g., "$116.00").
    pub fn total_display(&self) -> String {
        self.total().display()
    }
}

/// A product copied into the cart at add-time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Unique per add, so two adds of one product stay two entries.
    pub id: LineItemId,
    /// Product this entry was copied from.
    pub product_id: ProductId,
    /// Title at time of adding.
    pub title: String,
    /// Price at time of adding.
    pub price: Money,
    /// When the entry was added.
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Snapshot a product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            added_at: Utc::now(),
        }
    }

    /// Line shown in the cart summary ("Boho Western Dress - $72.00").
    pub fn summary_line(&self) -> String {
        format!("{} - {}", self.title, self.price.display())
    }
}
