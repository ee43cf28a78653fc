//! Night rate resolution.
//!
//! This module turns a stay's date range and one accommodation type into a
//! night-by-night rate breakdown, applying at most one rate adjustment per
//! night.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{AccommodationType, AdjustmentKind, NightBreakdown, RateAdjustment};

use super::day_detection::{get_day_type, stay_nights};
use super::money::percent_of;

/// Finds the adjustment that applies to a night for a given type.
///
/// The first matching adjustment in list order wins; there is no priority
/// ranking between overlapping adjustments.
pub fn find_applicable_adjustment<'a>(
    date: NaiveDate,
    type_id: &str,
    adjustments: &'a [RateAdjustment],
) -> Option<&'a RateAdjustment> {
    adjustments.iter().find(|adj| adj.applies(date, type_id))
}

/// Applies an adjustment to a base rate.
///
/// Returns `(adjustment_amount, effective_rate)`. The amount is the signed,
/// unclamped delta from the base rate; the effective rate is floored at zero.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::apply_adjustment;
/// use stay_pricing::models::AdjustmentKind;
/// use rust_decimal::Decimal;
///
/// let (amount, effective) = apply_adjustment(
///     Decimal::new(2000, 0),
///     AdjustmentKind::PercentageDiscount,
///     Decimal::new(20, 0),
/// );
/// assert_eq!(amount, Decimal::new(-400, 0));
/// assert_eq!(effective, Decimal::new(1600, 0));
/// ```
pub fn apply_adjustment(
    base_rate: Decimal,
    kind: AdjustmentKind,
    value: Decimal,
) -> (Decimal, Decimal) {
    let amount = match kind {
        AdjustmentKind::PercentageDiscount => -percent_of(base_rate, value),
        AdjustmentKind::PercentageSurcharge => percent_of(base_rate, value),
        AdjustmentKind::FixedOverride => value.saturating_sub(base_rate),
    };

    let effective = match kind {
        AdjustmentKind::FixedOverride => value,
        _ => base_rate.saturating_add(amount),
    };

    (amount, effective.max(Decimal::ZERO))
}

/// Resolves the rate for a single night.
pub fn resolve_night(
    date: NaiveDate,
    accommodation_type: &AccommodationType,
    adjustments: &[RateAdjustment],
) -> NightBreakdown {
    let day_type = get_day_type(date);
    let base_rate = accommodation_type.base_rate(day_type.is_weekend());

    let (adjustment_name, adjustment_amount, effective_rate) =
        match find_applicable_adjustment(date, &accommodation_type.id, adjustments) {
            Some(adjustment) => {
                let (amount, effective) =
                    apply_adjustment(base_rate, adjustment.kind, adjustment.value);
                (Some(adjustment.name.clone()), amount, effective)
            }
            None => (None, Decimal::ZERO, base_rate),
        };

    NightBreakdown {
        date,
        day_of_week: date.weekday(),
        is_weekend: day_type.is_weekend(),
        base_rate,
        adjustment_name,
        adjustment_amount,
        effective_rate,
    }
}

/// Produces the night-by-night rate breakdown for a stay.
///
/// One [`NightBreakdown`] is returned per date in `[check_in, check_out)`, in
/// date order. A stay with `check_out <= check_in` has no nights; that is not
/// an error here, date validation belongs to the caller.
///
/// # Arguments
///
/// * `check_in` - First night of the stay (inclusive)
/// * `check_out` - Departure date (exclusive)
/// * `accommodation_type` - The type whose rates apply
/// * `adjustments` - Every known adjustment, active or not, in priority order
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::resolve_nightly_rates;
/// use stay_pricing::models::AccommodationType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cottage = AccommodationType {
///     id: "deluxe_cottage".to_string(),
///     name: "Deluxe Cottage".to_string(),
///     base_rate_weekday: Decimal::new(2000, 0),
///     base_rate_weekend: Decimal::new(2500, 0),
///     base_pax: 2,
///     max_pax: 6,
///     additional_pax_fee: Decimal::new(300, 0),
/// };
///
/// // Friday to Sunday: one weekday night, one weekend night
/// let nights = resolve_nightly_rates(
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     &cottage,
///     &[],
/// );
/// assert_eq!(nights.len(), 2);
/// assert_eq!(nights[0].effective_rate, Decimal::new(2000, 0));
/// assert_eq!(nights[1].effective_rate, Decimal::new(2500, 0));
/// ```
pub fn resolve_nightly_rates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    accommodation_type: &AccommodationType,
    adjustments: &[RateAdjustment],
) -> Vec<NightBreakdown> {
    stay_nights(check_in, check_out)
        .map(|date| resolve_night(date, accommodation_type, adjustments))
        .collect()
}
