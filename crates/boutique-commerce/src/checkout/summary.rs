//! Checkout summary derived from the cart.

use crate::cart::Cart;
use crate::money::Money;

/// Totals shown next to the pay button.
///
/// Always built fresh from the cart, so it can never disagree with the
/// entries on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Sum of every entry's price.
    pub total: Money,
    /// Number of entries.
    pub item_count: usize,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            total: cart.total(),
            item_count: cart.len(),
        }
    }

    /// Pay button label (e.g., "Pay $116.00").
    pub fn pay_label(&self) -> String {
        format!("Pay {}", self.total.display())
    }

    /// The checkout form is only offered for a non-empty cart.
    pub fn is_visible(&self) -> bool {
        self.item_count > 0
    }
}
