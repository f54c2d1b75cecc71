//! Itinerary price types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;
use super::code::alpha3_code;

/// Error returned when parsing an invalid currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {reason}")]
pub struct InvalidCurrencyCode {
    reason: &'static str,
}

/// An ISO 4217 currency code (3 uppercase ASCII letters).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// US dollars.
    pub const USD: CurrencyCode = CurrencyCode(*b"USD");
}

alpha3_code!(CurrencyCode, InvalidCurrencyCode);

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::USD
    }
}

/// Round to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// The price of a complete itinerary.
///
/// Each breakdown component and the total are rounded to cents
/// independently, so the rounded components may differ from the rounded
/// total by up to a cent per component.
///
/// # Invariants
///
/// - Every component is finite and non-negative
/// - `amount` is the rounded sum of the unrounded components
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    amount: f64,
    currency: CurrencyCode,
    base: f64,
    distance: f64,
    layover: f64,
}

impl Price {
    /// Build a price from unrounded breakdown components.
    ///
    /// # Examples
    ///
    /// ```
    /// use skymesh::domain::{CurrencyCode, Price};
    ///
    /// let price = Price::from_components(CurrencyCode::USD, 100.0, 85.554, 12.004).unwrap();
    ///
    /// assert_eq!(price.base(), 100.0);
    /// assert_eq!(price.distance(), 85.55);
    /// assert_eq!(price.layover(), 12.0);
    /// assert_eq!(price.amount(), 197.56);
    /// ```
    pub fn from_components(
        currency: CurrencyCode,
        base: f64,
        distance: f64,
        layover: f64,
    ) -> Result<Self, DomainError> {
        for component in [base, distance, layover] {
            if !component.is_finite() {
                return Err(DomainError::InvalidPrice("component must be finite"));
            }
            if component < 0.0 {
                return Err(DomainError::InvalidPrice("component must be non-negative"));
            }
        }

        Ok(Price {
            amount: round_cents(base + distance + layover),
            currency,
            base: round_cents(base),
            distance: round_cents(distance),
            layover: round_cents(layover),
        })
    }

    /// Returns the total amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns the per-leg base fare total.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Returns the distance-based total.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the layover-penalty total.
    pub fn layover(&self) -> f64 {
        self.layover
    }

    /// Returns the sum of the rounded breakdown components.
    pub fn components_sum(&self) -> f64 {
        self.base + self.distance + self.layover
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (Base: {}, Distance: {}, Layover: {})",
            self.currency,
            format_amount(self.amount),
            format_amount(self.base),
            format_amount(self.distance),
            format_amount(self.layover),
        )
    }
}

/// Format an amount with two decimals and comma thousands separators.
fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The rounded components never drift more than a cent each from the total.
        #[test]
        fn components_sum_to_total(
            base in 0.0f64..1000.0,
            distance in 0.0f64..10000.0,
            layover in 0.0f64..500.0,
        ) {
            let price = Price::from_components(CurrencyCode::USD, base, distance, layover).unwrap();
            prop_assert!((price.amount() - price.components_sum()).abs() <= 0.03 + 1e-9);
        }
    }
}
