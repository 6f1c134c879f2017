//! Price type for catalog amounts.
//!
//! Prices are whole rupees held as unsigned integers, so comparisons against
//! the price filter are exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rupee sign used in every rendered price.
pub const RUPEE: &str = "\u{20b9}";

/// A non-negative catalog price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero price.
    pub const ZERO: Price = Price(0);

    /// Create a price from whole units.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Whole units.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Percentage saved against an original (pre-discount) price, rounded
    /// down. `None` unless `original` is strictly greater than `self`.
    pub fn discount_percent(&self, original: Price) -> Option<u8> {
        if original.0 <= self.0 {
            return None;
        }
        let saved = original.0 - self.0;
        Some(((saved as u128 * 100) / original.0 as u128) as u8)
    }

    /// Render as rupees with Indian digit grouping, e.g. `₹5,00,000`.
    pub fn display(&self) -> String {
        format_inr(self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Format an amount with the rupee sign and Indian grouping: the last three
/// digits form one group, every earlier group has two digits.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("{RUPEE}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{RUPEE}{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn test_format_indian_grouping() {
        assert_eq!(format_inr(1000), "₹1,000");
        assert_eq!(format_inr(50000), "₹50,000");
        assert_eq!(format_inr(500000), "₹5,00,000");
        assert_eq!(format_inr(12345678), "₹1,23,45,678");
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(125000).to_string(), "₹1,25,000");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(Price::new(750).discount_percent(Price::new(1000)), Some(25));
        assert_eq!(Price::new(1000).discount_percent(Price::new(1000)), None);
        assert_eq!(Price::new(1200).discount_percent(Price::new(1000)), None);
    }

    #[test]
    fn test_price_deserializes_from_number() {
        let price: Price = serde_json::from_str("42000").unwrap();
        assert_eq!(price.amount(), 42000);
    }
}
