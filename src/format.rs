//! Display formatting for currency amounts.
//!
//! Formatting is presentation only: the returned strings are for display and
//! are never parsed back into amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Most fractional digits shown.
const MAX_FRACTION_DIGITS: u32 = 2;

/// The currency a resort prices in.
///
/// # Example
///
/// ```
/// use stay_pricing::format::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let php = CurrencyFormat::default();
/// assert_eq!(php.format(Decimal::new(520000, 2)), "₱5,200");
/// assert_eq!(php.format(Decimal::new(160050, 2)), "₱1,600.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 code, e.g. "PHP".
    pub code: String,
    /// Symbol placed before the amount, e.g. "₱".
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            code: "PHP".to_string(),
            symbol: "₱".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Formats an amount with 0 to 2 fractional digits and thousands grouping.
    ///
    /// Trailing fractional zeros are dropped (`2000.00` shows as `2,000`).
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = rounded.abs().to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut formatted = format!("{sign}{}{}", self.symbol, group_thousands(whole));
        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn php(s: &str) -> String {
        CurrencyFormat::default().format(dec(s))
    }

    #[test]
    fn test_whole_amount_has_no_fraction() {
        assert_eq!(php("5200"), "₱5,200");
        assert_eq!(php("5200.00"), "₱5,200");
    }

    #[test]
    fn test_fraction_keeps_significant_digits_only() {
        assert_eq!(php("1600.50"), "₱1,600.5");
        assert_eq!(php("1600.25"), "₱1,600.25");
    }

    #[test]
    fn test_rounds_to_two_digits_for_display() {
        assert_eq!(php("1749.125"), "₱1,749.13");
        assert_eq!(php("0.004"), "₱0");
    }

    #[test]
    fn test_small_and_large_amounts() {
        assert_eq!(php("0"), "₱0");
        assert_eq!(php("999"), "₱999");
        assert_eq!(php("1000"), "₱1,000");
        assert_eq!(php("1234567.8"), "₱1,234,567.8");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(php("-700"), "-₱700");
        assert_eq!(php("-0.001"), "₱0");
    }

    #[test]
    fn test_custom_symbol() {
        let usd = CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        };
        assert_eq!(usd.format(dec("12500.5")), "$12,500.5");
    }

    #[test]
    fn test_formatting_does_not_change_amount() {
        let amount = dec("1749.125");
        let _ = CurrencyFormat::default().format(amount);
        assert_eq!(amount, dec("1749.125"));
    }
}
