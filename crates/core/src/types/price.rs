//! Integer so'm price representation.
//!
//! Prices are whole Uzbek so'm (UZS) end to end: the bot API stores them
//! as free-form strings like "350 000" or "350,000 so'm", and no tiyin
//! fractions exist anywhere in the catalog.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in whole so'm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero so'm.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole so'm amount.
    #[must_use]
    pub const fn new(som: u64) -> Self {
        Self(som)
    }

    /// Parse a price out of free-form listing text.
    ///
    /// Strips every non-digit character and parses the remainder, so
    /// "350 000", "350,000 so'm" and "350000" all yield the same price.
    /// Text with no digits parses as zero.
    #[must_use]
    pub fn from_text(s: &str) -> Self {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        Self(digits.parse().unwrap_or(0))
    }

    /// The amount in whole so'm.
    #[must_use]
    pub const fn as_som(self) -> u64 {
        self.0
    }

    /// Whether the price is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Line total for `quantity` units, saturating at `u64::MAX`.
    #[must_use]
    #[allow(clippy::cast_lossless)] // u64::from is not const
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Saturating sum of two prices.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Format with space-grouped thousands, e.g. `350 000`.
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (len - i) % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

impl From<u64> for Price {
    fn from(som: u64) -> Self {
        Self(som)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_plain_digits() {
        assert_eq!(Price::from_text("350000"), Price::new(350_000));
    }

    #[test]
    fn test_from_text_spaced() {
        assert_eq!(Price::from_text("350 000"), Price::new(350_000));
    }

    #[test]
    fn test_from_text_with_suffix() {
        assert_eq!(Price::from_text("350,000 so'm"), Price::new(350_000));
        assert_eq!(Price::from_text("25 000 UZS"), Price::new(25_000));
    }

    #[test]
    fn test_from_text_no_digits_is_zero() {
        assert_eq!(Price::from_text("kelishiladi"), Price::ZERO);
        assert_eq!(Price::from_text(""), Price::ZERO);
    }

    #[test]
    fn test_grouped() {
        assert_eq!(Price::new(0).grouped(), "0");
        assert_eq!(Price::new(999).grouped(), "999");
        assert_eq!(Price::new(1_000).grouped(), "1 000");
        assert_eq!(Price::new(350_000).grouped(), "350 000");
        assert_eq!(Price::new(1_234_567).grouped(), "1 234 567");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::new(120_000).times(3), Price::new(360_000));
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn test_ordering_against_threshold() {
        let threshold = Price::new(300_000);
        assert!(Price::new(300_000) >= threshold);
        assert!(Price::new(299_999) < threshold);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Price::new(45_000)).unwrap();
        assert_eq!(json, "45000");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::new(45_000));
    }
}
