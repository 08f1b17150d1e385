//! Money type for representing monetary values.
//!
//! Amounts are integer cents, so cart totals are exact sums. Conversion from
//! the catalog's decimal prices happens once, at the fetch boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

const CENTS_PER_UNIT: i64 = 100;

/// Currency of a price. The catalog API prices everything in US dollars, so
/// there is exactly one and amounts can always be added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use topshop_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(109.95, Currency::USD);
    /// assert_eq!(price.amount_cents, 10995);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * CENTS_PER_UNIT as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Format as a display string (e.g., "$49.99", "-$2.50").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let units = CENTS_PER_UNIT as u64;
        format!(
            "{sign}{}{}.{:02}",
            self.currency.symbol(),
            abs / units,
            abs % units
        )
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn multiply(&self, factor: u64) -> Money {
        let factor = i64::try_from(factor).unwrap_or(i64::MAX);
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
