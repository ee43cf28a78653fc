//! Calculation logic for the stay pricing engine.
//!
//! This module contains the pure pricing functions: day detection and stay
//! segmentation, night rate resolution with rate adjustments, the occupancy
//! surcharge with the free-child policy, add-on pricing, the single-stay
//! calculator and the multi-room calculator.
//!
//! None of these functions perform I/O, hold state or return errors.
//! Money arithmetic saturates at the bounds of `Decimal` rather than
//! overflowing.

mod addons;
mod day_detection;
mod money;
mod multi_room;
mod night_rates;
mod occupancy;
mod single_stay;

pub use addons::{AddonPricingResult, price_addon, price_addons};
pub use day_detection::{DayType, get_day_type, stay_nights};
pub use money::{percent_of, saturating_sum};
pub use multi_room::calculate_multi_room_price;
pub use night_rates::{
    apply_adjustment, find_applicable_adjustment, resolve_night, resolve_nightly_rates,
};
pub use occupancy::{
    FREE_CHILDREN_PER_ROOM, PaxSurchargeResult, billable_pax, calculate_pax_surcharge,
};
pub use single_stay::calculate_stay_price;
