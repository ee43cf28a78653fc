//! Core data models for the stay pricing engine.
//!
//! This module contains the catalog records the engine reads and the
//! result types it produces.

mod accommodation;
mod addon;
mod price_calculation;
mod rate_adjustment;
mod room;

pub use accommodation::AccommodationType;
pub use addon::{Addon, AddonSelection, PricingModel};
pub use price_calculation::{
    AddonLine, MultiRoomCalculation, NightBreakdown, PerRoomBreakdown, PriceCalculation,
};
pub use rate_adjustment::{AdjustmentKind, AppliesTo, RateAdjustment};
pub use room::RoomEntry;
