//! Multi-room (group booking) price calculation.
//!
//! Each room is priced on its own: its own accommodation type, its own guest
//! counts and its own add-ons. The rooms are then merged into one group total
//! together with add-ons charged once for the whole group.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    AddonSelection, MultiRoomCalculation, PerRoomBreakdown, PriceCalculation, RateAdjustment,
    RoomEntry,
};

use super::addons::price_addons;
use super::money::saturating_sum;
use super::night_rates::resolve_nightly_rates;
use super::occupancy::calculate_pax_surcharge;

/// Calculates the price of a group booking spanning several rooms.
///
/// Guests are never pooled across rooms: each room's surcharge is measured
/// against its own type's included occupancy. Group add-ons are priced once;
/// a per-person group add-on counts every guest in every room.
///
/// The aggregate `nights` and `total_nights` come from the first room. All
/// rooms share the same dates, so any room would give the same count.
///
/// An empty room list returns an all-zero calculation.
///
/// # Arguments
///
/// * `check_in` - First night of the stay (inclusive)
/// * `check_out` - Departure date (exclusive)
/// * `rooms` - The rooms being booked, in display order
/// * `adjustments` - Every known adjustment for the resort, in priority order
/// * `group_addons` - Add-ons charged once for the whole group
/// * `room_addons` - Add-ons selected for individual rooms, keyed by `room_id`
pub fn calculate_multi_room_price(
    check_in: NaiveDate,
    check_out: NaiveDate,
    rooms: &[RoomEntry],
    adjustments: &[RateAdjustment],
    group_addons: &[AddonSelection],
    room_addons: &HashMap<String, Vec<AddonSelection>>,
) -> MultiRoomCalculation {
    if rooms.is_empty() {
        return MultiRoomCalculation::empty();
    }

    let mut per_room_breakdown = Vec::with_capacity(rooms.len());
    let mut addon_lines = Vec::new();
    let mut aggregate_nights = None;
    let mut extra_pax: u32 = 0;
    let mut pax_surcharge_per_night = Decimal::ZERO;
    let mut all_guests: u32 = 0;

    for room in rooms {
        let accommodation_type = &room.accommodation_type;
        let nights = resolve_nightly_rates(check_in, check_out, accommodation_type, adjustments);
        let room_nights = nights.len() as u32;
        let base_amount = saturating_sum(nights.iter().map(|n| n.effective_rate));

        let surcharge = calculate_pax_surcharge(
            accommodation_type,
            room.num_adults,
            room.num_children,
            room_nights,
        );

        let selections = room_addons
            .get(&room.room_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let room_addon_pricing = price_addons(selections, room.total_guests());

        per_room_breakdown.push(PerRoomBreakdown {
            room_id: room.room_id.clone(),
            type_id: accommodation_type.id.clone(),
            base_amount,
            pax_surcharge: surcharge.total,
            addons_amount: room_addon_pricing.total,
            total_amount: saturating_sum([
                base_amount,
                surcharge.total,
                room_addon_pricing.total,
            ]),
        });

        extra_pax = extra_pax.saturating_add(surcharge.extra_pax);
        pax_surcharge_per_night = pax_surcharge_per_night.saturating_add(surcharge.per_night);
        all_guests = all_guests.saturating_add(room.total_guests());
        addon_lines.extend(room_addon_pricing.lines);

        if aggregate_nights.is_none() {
            aggregate_nights = Some(nights);
        }
    }

    let group_addon_pricing = price_addons(group_addons, all_guests);
    addon_lines.extend(group_addon_pricing.lines);

    let total_base_rate = saturating_sum(per_room_breakdown.iter().map(|r| r.base_amount));
    let total_pax_surcharge = saturating_sum(per_room_breakdown.iter().map(|r| r.pax_surcharge));
    let room_addons_total = saturating_sum(per_room_breakdown.iter().map(|r| r.addons_amount));
    let addons_total = room_addons_total.saturating_add(group_addon_pricing.total);
    let grand_total = saturating_sum(per_room_breakdown.iter().map(|r| r.total_amount))
        .saturating_add(group_addon_pricing.total);

    let nights = aggregate_nights.unwrap_or_default();
    let total_nights = nights.len() as u32;

    let calculation = MultiRoomCalculation {
        totals: PriceCalculation {
            nights,
            total_nights,
            total_base_rate,
            extra_pax,
            pax_surcharge_per_night,
            total_pax_surcharge,
            addon_lines,
            addons_total,
            grand_total,
        },
        per_room_breakdown,
        group_addons_total: group_addon_pricing.total,
    };

    debug_assert!(
        calculation.is_consistent(),
        "per-room amounts do not add up to the group total"
    );

    calculation
}
