//! Add-on models.
//!
//! Add-ons are purchasable extras (breakfast, airport transfer, island
//! hopping...). They are priced once per stay, either flat or per guest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an add-on's line total scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    /// `price * quantity`.
    PerBooking,
    /// `price * guests * quantity`.
    PerPerson,
}

/// A purchasable extra from the resort's add-on catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    /// Unique identifier within the resort.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// How the price scales.
    pub pricing_model: PricingModel,
}

/// An add-on chosen by the guest, with the quantity selected.
///
/// # Example
///
/// ```
/// use stay_pricing::models::{Addon, AddonSelection, PricingModel};
/// use rust_decimal::Decimal;
///
/// let breakfast = Addon {
///     id: "breakfast".to_string(),
///     name: "Breakfast Buffet".to_string(),
///     price: Decimal::new(150, 0),
///     pricing_model: PricingModel::PerPerson,
/// };
/// let selection = AddonSelection::new(breakfast, 2);
/// assert_eq!(selection.quantity, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonSelection {
    /// The selected add-on.
    pub addon: Addon,
    /// How many were selected.
    pub quantity: u32,
}

impl AddonSelection {
    /// Creates a selection of `quantity` units of `addon`.
    pub fn new(addon: Addon, quantity: u32) -> Self {
        Self { addon, quantity }
    }
}
