//! Price calculation result models.
//!
//! This module contains the engine's outputs: the per-night
//! [`NightBreakdown`], the itemized [`AddonLine`], the single-stay
//! [`PriceCalculation`], and the group-level [`MultiRoomCalculation`] with
//! its [`PerRoomBreakdown`] entries.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PricingModel;
use crate::calculation::saturating_sum;

/// The resolved rate for one calendar night.
///
/// # Example
///
/// ```
/// use stay_pricing::models::NightBreakdown;
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let night = NightBreakdown {
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     day_of_week: Weekday::Mon,
///     is_weekend: false,
///     base_rate: Decimal::new(2000, 0),
///     adjustment_name: None,
///     adjustment_amount: Decimal::ZERO,
///     effective_rate: Decimal::new(2000, 0),
/// };
/// assert!(!night.is_adjusted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightBreakdown {
    /// The calendar date of the night.
    pub date: NaiveDate,
    /// Day of the week of `date`.
    pub day_of_week: Weekday,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// The undiscounted rate for the night.
    pub base_rate: Decimal,
    /// Name of the adjustment that applied, if any.
    pub adjustment_name: Option<String>,
    /// Signed delta from `base_rate`; zero when no adjustment applied.
    pub adjustment_amount: Decimal,
    /// `base_rate + adjustment_amount`, floored at zero.
    pub effective_rate: Decimal,
}

impl NightBreakdown {
    /// Returns true if a rate adjustment applied to this night.
    pub fn is_adjusted(&self) -> bool {
        self.adjustment_name.is_some()
    }
}

/// One priced add-on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonLine {
    /// The add-on's id.
    pub addon_id: String,
    /// The add-on's display name.
    pub name: String,
    /// How the line was priced.
    pub pricing_model: PricingModel,
    /// Unit price of the add-on.
    pub unit_price: Decimal,
    /// Quantity selected.
    pub quantity: u32,
    /// Guests counted for the line (1 for per-booking add-ons).
    pub guests: u32,
    /// `unit_price * guests * quantity`.
    pub line_total: Decimal,
}

/// The fully itemized price of a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCalculation {
    /// One entry per night in `[check_in, check_out)`.
    pub nights: Vec<NightBreakdown>,
    /// Number of nights.
    pub total_nights: u32,
    /// Sum of the nights' effective rates.
    pub total_base_rate: Decimal,
    /// Guests billed above the included occupancy.
    pub extra_pax: u32,
    /// `extra_pax * additional_pax_fee`.
    pub pax_surcharge_per_night: Decimal,
    /// `pax_surcharge_per_night * total_nights`.
    pub total_pax_surcharge: Decimal,
    /// Itemized add-on lines.
    pub addon_lines: Vec<AddonLine>,
    /// Sum of the add-on line totals.
    pub addons_total: Decimal,
    /// `total_base_rate + total_pax_surcharge + addons_total`.
    pub grand_total: Decimal,
}

impl PriceCalculation {
    /// Returns an all-zero calculation with no nights.
    pub fn empty() -> Self {
        Self {
            nights: Vec::new(),
            total_nights: 0,
            total_base_rate: Decimal::ZERO,
            extra_pax: 0,
            pax_surcharge_per_night: Decimal::ZERO,
            total_pax_surcharge: Decimal::ZERO,
            addon_lines: Vec::new(),
            addons_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

/// The share of a group booking attributable to one room.
///
/// These amounts are embedded verbatim into the per-room reservation records
/// when a group booking is split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerRoomBreakdown {
    /// The room the amounts belong to.
    pub room_id: String,
    /// The room's accommodation type.
    pub type_id: String,
    /// Sum of the room's effective nightly rates.
    pub base_amount: Decimal,
    /// The room's extra-guest surcharge for the whole stay.
    pub pax_surcharge: Decimal,
    /// The room's own add-ons.
    pub addons_amount: Decimal,
    /// `base_amount + pax_surcharge + addons_amount`.
    pub total_amount: Decimal,
}

/// The price of a group booking spanning several rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRoomCalculation {
    /// Aggregate figures across all rooms plus group add-ons.
    #[serde(flatten)]
    pub totals: PriceCalculation,
    /// One entry per room, in input order.
    pub per_room_breakdown: Vec<PerRoomBreakdown>,
    /// Add-ons charged once for the whole group.
    pub group_addons_total: Decimal,
}

impl MultiRoomCalculation {
    /// Returns an all-zero calculation with no rooms.
    pub fn empty() -> Self {
        Self {
            totals: PriceCalculation::empty(),
            per_room_breakdown: Vec::new(),
            group_addons_total: Decimal::ZERO,
        }
    }

    /// Checks that the per-room entries plus the group add-ons add up to the
    /// aggregate figures exactly.
    pub fn is_consistent(&self) -> bool {
        let rooms = &self.per_room_breakdown;
        let base = saturating_sum(rooms.iter().map(|r| r.base_amount));
        let surcharge = saturating_sum(rooms.iter().map(|r| r.pax_surcharge));
        let addons = saturating_sum(rooms.iter().map(|r| r.addons_amount));
        let total = saturating_sum(rooms.iter().map(|r| r.total_amount));

        let rooms_add_up = rooms.iter().all(|r| {
            saturating_sum([r.base_amount, r.pax_surcharge, r.addons_amount]) == r.total_amount
        });

        rooms_add_up
            && base == self.totals.total_base_rate
            && surcharge == self.totals.total_pax_surcharge
            && addons.saturating_add(self.group_addons_total) == self.totals.addons_total
            && total.saturating_add(self.group_addons_total) == self.totals.grand_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_room(room_id: &str, base: &str, surcharge: &str, addons: &str) -> PerRoomBreakdown {
        PerRoomBreakdown {
            room_id: room_id.to_string(),
            type_id: "deluxe_cottage".to_string(),
            base_amount: dec(base),
            pax_surcharge: dec(surcharge),
            addons_amount: dec(addons),
            total_amount: dec(base) + dec(surcharge) + dec(addons),
        }
    }

    fn create_group(grand_total: &str) -> MultiRoomCalculation {
        let mut totals = PriceCalculation::empty();
        totals.total_base_rate = dec("7000");
        totals.total_pax_surcharge = dec("600");
        totals.addons_total = dec("800");
        totals.grand_total = dec(grand_total);

        MultiRoomCalculation {
            totals,
            per_room_breakdown: vec![
                create_room("room_1", "4000", "600", "300"),
                create_room("room_2", "3000", "0", "0"),
            ],
            group_addons_total: dec("500"),
        }
    }

    #[test]
    fn test_empty_calculation_is_all_zero() {
        let empty = PriceCalculation::empty();
        assert!(empty.nights.is_empty());
        assert_eq!(empty.total_nights, 0);
        assert_eq!(empty.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_empty_group_is_consistent() {
        assert!(MultiRoomCalculation::empty().is_consistent());
    }

    #[test]
    fn test_matching_group_is_consistent() {
        assert!(create_group("8400").is_consistent());
    }

    #[test]
    fn test_drifted_grand_total_is_inconsistent() {
        assert!(!create_group("8400.01").is_consistent());
    }

    #[test]
    fn test_room_total_not_matching_parts_is_inconsistent() {
        let mut group = create_group("8400");
        group.per_room_breakdown[1].total_amount = dec("2999");
        group.per_room_breakdown[0].total_amount = dec("4901");
        assert!(!group.is_consistent());
    }

    #[test]
    fn test_group_serializes_aggregate_fields_flat() {
        let value = serde_json::to_value(create_group("8400")).unwrap();
        assert_eq!(value["grand_total"], "8400");
        assert_eq!(value["group_addons_total"], "500");
        assert_eq!(value["per_room_breakdown"][0]["room_id"], "room_1");
        assert!(value.get("totals").is_none());
    }

    #[test]
    fn test_is_adjusted_follows_adjustment_name() {
        let mut night = NightBreakdown {
            date: chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            day_of_week: Weekday::Mon,
            is_weekend: false,
            base_rate: dec("2000"),
            adjustment_name: None,
            adjustment_amount: Decimal::ZERO,
            effective_rate: dec("2000"),
        };
        assert!(!night.is_adjusted());

        night.adjustment_name = Some("Rainy Season Promo".to_string());
        night.adjustment_amount = dec("-400");
        night.effective_rate = dec("1600");
        assert!(night.is_adjusted());
    }
}
