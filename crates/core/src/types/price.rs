//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }
}

impl fmt::Display for Price {
    /// Formats as symbol plus two decimal places, e.g. `$19.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount.round_dp(2);
        write!(f, "{}{amount:.2}", self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        let price = Price::new(Decimal::new(199, 1), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$19.90");
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(2500, CurrencyCode::GBP);
        assert_eq!(price.amount, Decimal::new(25, 0));
        assert_eq!(price.to_string(), "£25.00");
    }

    #[test]
    fn test_currency_defaults_to_usd() {
        let price: Price = serde_json::from_str(r#"{"amount":"4.50"}"#).unwrap();
        assert_eq!(price.currency_code, CurrencyCode::USD);
        assert_eq!(price.to_string(), "$4.50");
    }
}
