//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as JSON numbers (`109.95`). They are held as a
//! [`Decimal`] so line totals and subtotals never pick up binary
//! floating-point error, and are written back out as JSON numbers.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// A price in the store's currency (US dollars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Formats as dollars with two decimal places, e.g. `$109.95`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(10995).to_string(), "$109.95");
        assert_eq!(Price::from_cents(2230).to_string(), "$22.30");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_price_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(price, Price::from_cents(10995));

        let price: Price = serde_json::from_str("7").unwrap();
        assert_eq!(price, Price::from_cents(700));
    }

    #[test]
    fn test_price_deserializes_from_json_string() {
        let price: Price = serde_json::from_str("\"15.99\"").unwrap();
        assert_eq!(price, Price::from_cents(1599));
    }

    #[test]
    fn test_price_serializes_as_json_number() {
        assert_eq!(serde_json::to_string(&Price::from_cents(10995)).unwrap(), "109.95");
        assert_eq!(serde_json::to_string(&Price::from_cents(700)).unwrap(), "7.0");
        assert_eq!(
            serde_json::to_value(Price::from_cents(1599)).unwrap(),
            serde_json::json!(15.99)
        );
    }

    #[test]
    fn test_price_times() {
        assert_eq!(Price::from_cents(1599).times(3), Price::from_cents(4797));
        assert_eq!(Price::from_cents(1599).times(0), Price::ZERO);
    }

    #[test]
    fn test_price_sum_is_exact() {
        let total: Price = [Price::from_cents(10), Price::from_cents(20)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(30));
        assert_eq!(total.to_string(), "$0.30");
    }
}
