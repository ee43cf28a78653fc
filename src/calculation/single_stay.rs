//! Single-stay price calculation.
//!
//! Combines the night rate breakdown with the occupancy surcharge and the
//! guest's add-on selections into one [`PriceCalculation`].

use chrono::NaiveDate;

use crate::models::{AccommodationType, AddonSelection, PriceCalculation, RateAdjustment};

use super::addons::price_addons;
use super::money::saturating_sum;
use super::night_rates::resolve_nightly_rates;
use super::occupancy::calculate_pax_surcharge;

/// Calculates the price of a single stay.
///
/// The calculation never fails: a zero-night stay, zero adults or an
/// over-capacity party all produce a number. Validating those inputs is the
/// caller's job, so the function can be called speculatively while a guest is
/// still filling in the booking form.
///
/// Identical inputs always produce identical output.
///
/// # Arguments
///
/// * `check_in` - First night of the stay (inclusive)
/// * `check_out` - Departure date (exclusive)
/// * `accommodation_type` - The type being booked
/// * `adjustments` - Every known adjustment for the resort, in priority order
/// * `num_adults` - Adults in the party
/// * `num_children` - Children in the party
/// * `addons` - The guest's add-on selections
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::calculate_stay_price;
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
/// // Monday to Wednesday, four adults
/// let price = calculate_stay_price(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     &cottage,
///     &[],
///     4,
///     0,
///     &[],
/// );
/// assert_eq!(price.total_base_rate, Decimal::new(4000, 0));
/// assert_eq!(price.total_pax_surcharge, Decimal::new(1200, 0));
/// assert_eq!(price.grand_total, Decimal::new(5200, 0));
/// ```
pub fn calculate_stay_price(
    check_in: NaiveDate,
    check_out: NaiveDate,
    accommodation_type: &AccommodationType,
    adjustments: &[RateAdjustment],
    num_adults: u32,
    num_children: u32,
    addons: &[AddonSelection],
) -> PriceCalculation {
    let nights = resolve_nightly_rates(check_in, check_out, accommodation_type, adjustments);
    let total_nights = nights.len() as u32;
    let total_base_rate = saturating_sum(nights.iter().map(|n| n.effective_rate));

    let surcharge =
        calculate_pax_surcharge(accommodation_type, num_adults, num_children, total_nights);

    let all_guests = num_adults.saturating_add(num_children);
    let addon_pricing = price_addons(addons, all_guests);

    let grand_total = total_base_rate
        .saturating_add(surcharge.total)
        .saturating_add(addon_pricing.total);

    PriceCalculation {
        nights,
        total_nights,
        total_base_rate,
        extra_pax: surcharge.extra_pax,
        pax_surcharge_per_night: surcharge.per_night,
        total_pax_surcharge: surcharge.total,
        addon_lines: addon_pricing.lines,
        addons_total: addon_pricing.total,
        grand_total,
    }
}
