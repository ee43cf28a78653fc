//! Accommodation type model.
//!
//! This module defines the [`AccommodationType`] catalog record: the rentable
//! unit category whose rates, capacity and extra-guest fee drive pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable unit category (e.g. "Deluxe Cottage").
///
/// Owned by the resort catalog and read-only to the pricing engine.
///
/// # Example
///
/// ```
/// use stay_pricing::models::AccommodationType;
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
/// assert_eq!(cottage.base_rate(true), Decimal::new(2500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationType {
    /// Unique identifier of the type within the resort.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Nightly rate Monday through Friday.
    pub base_rate_weekday: Decimal,
    /// Nightly rate on Saturday and Sunday.
    pub base_rate_weekend: Decimal,
    /// Guests included in the base rate.
    pub base_pax: u32,
    /// Hard capacity. Informational for pricing.
    pub max_pax: u32,
    /// Fee per extra guest, per night.
    pub additional_pax_fee: Decimal,
}

impl AccommodationType {
    /// Returns the undiscounted nightly rate for a weekend or weekday night.
    pub fn base_rate(&self, is_weekend: bool) -> Decimal {
        if is_weekend {
            self.base_rate_weekend
        } else {
            self.base_rate_weekday
        }
    }

    /// Returns true if `guests` exceeds the type's hard capacity.
    pub fn is_over_capacity(&self, guests: u32) -> bool {
        guests > self.max_pax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_cottage() -> AccommodationType {
        AccommodationType {
            id: "deluxe_cottage".to_string(),
            name: "Deluxe Cottage".to_string(),
            base_rate_weekday: Decimal::new(2000, 0),
            base_rate_weekend: Decimal::new(2500, 0),
            base_pax: 2,
            max_pax: 6,
            additional_pax_fee: Decimal::new(300, 0),
        }
    }

    #[test]
    fn test_base_rate_picks_weekday_rate() {
        assert_eq!(create_cottage().base_rate(false), Decimal::new(2000, 0));
    }

    #[test]
    fn test_base_rate_picks_weekend_rate() {
        assert_eq!(create_cottage().base_rate(true), Decimal::new(2500, 0));
    }

    #[test]
    fn test_capacity_is_inclusive() {
        let cottage = create_cottage();
        assert!(!cottage.is_over_capacity(6));
        assert!(cottage.is_over_capacity(7));
    }

    #[test]
    fn test_deserialize_from_yaml_numbers() {
        let yaml = r#"
id: family_villa
name: Family Villa
base_rate_weekday: 4500
base_rate_weekend: 5200.50
base_pax: 4
max_pax: 8
additional_pax_fee: 250
"#;
        let villa: AccommodationType = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(villa.id, "family_villa");
        assert_eq!(villa.base_rate_weekend, Decimal::new(520050, 2));
        assert_eq!(villa.base_pax, 4);
    }
}
