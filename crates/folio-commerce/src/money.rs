//! Money type for prices, amounts, and commissions.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in monetary calculations. Percentage math rounds to the
//! nearest cent, which is the only rounding this subsystem performs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(cents: i64, currency: Currency) -> Self {
        Self { cents, currency }
    }

    /// Create a Money value from a major-unit amount.
    ///
    /// ```
    /// use folio_commerce::money::{Currency, Money};
    /// let price = Money::from_major(24.99, Currency::EUR);
    /// assert_eq!(price.cents, 2499);
    /// ```
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Convert to a major-unit decimal value.
    pub fn to_major(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percent_of(&self, percent: f64) -> Money {
        let cents = (self.cents as f64 * percent / 100.0).round() as i64;
        Money::new(cents, self.currency)
    }

    /// This amount reduced by a percentage, rounded to the nearest cent.
    pub fn less_percent(&self, percent: f64) -> Money {
        self.percent_of(100.0 - percent)
    }

    /// Format as a display string (e.g., "€24.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_major())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
