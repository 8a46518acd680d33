//! Display currencies for the shop demo.
//!
//! All catalog prices and cart totals are stored in whole INR units. The
//! other currencies exist for display only and are derived with static demo
//! rates; nothing here is authoritative and nothing is fetched live.

use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Indian rupee, the base currency.
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// All currencies, in selector order.
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Get the display symbol (e.g., "\u{20b9}").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "\u{20b9}",
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
            Currency::Gbp => "\u{00a3}",
        }
    }

    /// Static conversion rate against INR.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Eur => 0.011,
            Currency::Gbp => 0.0095,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Result<Self, ShopError> {
        match code.to_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(ShopError::UnknownCurrency(code.to_string())),
        }
    }

    /// Convert a base-currency amount into this currency, rounded to whole
    /// display units. Display-only; never feed the result back into totals.
    pub fn convert(&self, base_amount: i64) -> i64 {
        (base_amount as f64 * self.rate()).round() as i64
    }

    /// Format a base-currency amount as a localized string in this currency
    /// (e.g., `1_18_000` INR -> "\u{20b9}1,18,000", or "$1,416" in USD).
    pub fn display(&self, base_amount: i64) -> String {
        let amount = self.convert(base_amount);
        format!("{}{}", self.symbol(), group_digits(amount, *self))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Group digits for display. INR uses Indian lakh/crore grouping (last three
/// digits, then pairs); the rest group by thousands.
fn group_digits(amount: i64, currency: Currency) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let grouped = match currency {
        Currency::Inr => group_indian(&digits),
        _ => group_thousands(&digits),
    };

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_currency_identity() {
        assert_eq!(Currency::Inr.convert(2499), 2499);
    }

    #[test]
    fn test_conversion_rounds() {
        // 2499 * 0.012 = 29.988 -> 30
        assert_eq!(Currency::Usd.convert(2499), 30);
        // 100 * 0.0095 = 0.95 -> 1
        assert_eq!(Currency::Gbp.convert(100), 1);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Currency::Inr.display(999), "\u{20b9}999");
        assert_eq!(Currency::Inr.display(1000), "\u{20b9}1,000");
        assert_eq!(Currency::Inr.display(118_000), "\u{20b9}1,18,000");
        assert_eq!(Currency::Inr.display(12_345_678), "\u{20b9}1,23,45,678");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(Currency::Usd.display(118_000), "$1,416");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("123"), "123");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(group_digits(-118_000, Currency::Inr), "-1,18,000");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("inr").unwrap(), Currency::Inr);
        assert_eq!(Currency::from_code("USD").unwrap(), Currency::Usd);
        assert!(Currency::from_code("XYZ").is_err());
    }
}
