//! Money type for representing monetary values.
//!
//! The boutique prices everything in US dollars. Amounts are integer cents so
//! cart totals never pick up floating-point rounding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A US dollar amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { amount_cents: 0 };

    /// A USD amount in cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Format as a display string (e.g., "$49.99").
    ///
    /// ```
    /// use boutique_commerce::money::Money;
    /// assert_eq!(Money::usd(11600).display(), "$116.00");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }

    /// Add, saturating at the `i64` bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money::usd(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(6800).display(), "$68.00");
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::usd(-150).display(), "-$1.50");
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Money::usd(4400).saturating_add(Money::usd(7200)), Money::usd(11600));
        assert_eq!(Money::usd(i64::MAX).saturating_add(Money::usd(1)), Money::usd(i64::MAX));
    }

    #[test]
    fn test_serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::usd(6800)).unwrap(), "6800");
    }
}
