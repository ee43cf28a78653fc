//! Overflow-safe money arithmetic.
//!
//! Pricing never fails, so amounts that would leave `Decimal`'s range are
//! pinned to `Decimal::MAX` or `Decimal::MIN` instead.

use rust_decimal::Decimal;

/// Sums amounts left to right, saturating at the bounds of `Decimal`.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::saturating_sum;
/// use rust_decimal::Decimal;
///
/// assert_eq!(saturating_sum([Decimal::new(2000, 0), Decimal::new(2500, 0)]), Decimal::new(4500, 0));
/// assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
/// ```
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// Returns `percent`% of `amount`, saturating on overflow.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    match amount.checked_mul(percent) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (amount / Decimal::ONE_HUNDRED).saturating_mul(percent),
    }
}
