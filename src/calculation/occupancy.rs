//! Occupancy surcharge calculation.
//!
//! Guests beyond an accommodation type's included occupancy are billed a
//! flat fee per night. One child per room is never counted toward occupancy.

use rust_decimal::Decimal;

use crate::models::AccommodationType;

/// Children per room exempt from occupancy counting.
pub const FREE_CHILDREN_PER_ROOM: u32 = 1;

/// The result of an occupancy surcharge calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaxSurchargeResult {
    /// Guests counted against the included occupancy.
    pub billable_pax: u32,
    /// Guests above the included occupancy.
    pub extra_pax: u32,
    /// `extra_pax * additional_pax_fee`.
    pub per_night: Decimal,
    /// `per_night * nights`.
    pub total: Decimal,
}

/// Counts the guests that occupy billable places.
///
/// Exactly one child is exempt, however many children are in the party.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::billable_pax;
///
/// assert_eq!(billable_pax(2, 0), 2);
/// assert_eq!(billable_pax(2, 1), 2);
/// assert_eq!(billable_pax(2, 3), 4);
/// ```
pub fn billable_pax(num_adults: u32, num_children: u32) -> u32 {
    let free_children = num_children.min(FREE_CHILDREN_PER_ROOM);
    num_adults.saturating_add(num_children - free_children)
}

/// Calculates the extra-guest surcharge for a stay.
///
/// The surcharge is flat per night: rate adjustments that changed a night's
/// rate do not change the surcharge. Capacity (`max_pax`) is not enforced;
/// an over-capacity party simply produces a larger surcharge.
///
/// # Arguments
///
/// * `accommodation_type` - The type whose `base_pax` and fee apply
/// * `num_adults` - Adults in the party
/// * `num_children` - Children in the party
/// * `total_nights` - Number of nights in the stay
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::calculate_pax_surcharge;
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
///
/// let result = calculate_pax_surcharge(&cottage, 4, 0, 2);
/// assert_eq!(result.extra_pax, 2);
/// assert_eq!(result.per_night, Decimal::new(600, 0));
/// assert_eq!(result.total, Decimal::new(1200, 0));
/// ```
pub fn calculate_pax_surcharge(
    accommodation_type: &AccommodationType,
    num_adults: u32,
    num_children: u32,
    total_nights: u32,
) -> PaxSurchargeResult {
    let billable_pax = billable_pax(num_adults, num_children);
    let extra_pax = billable_pax.saturating_sub(accommodation_type.base_pax);
    let per_night = Decimal::from(extra_pax).saturating_mul(accommodation_type.additional_pax_fee);
    let total = per_night.saturating_mul(Decimal::from(total_nights));

    PaxSurchargeResult {
        billable_pax,
        extra_pax,
        per_night,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_type(base_pax: u32, fee: &str) -> AccommodationType {
        AccommodationType {
            id: "test_type".to_string(),
            name: "Test Type".to_string(),
            base_rate_weekday: dec("2000"),
            base_rate_weekend: dec("2500"),
            base_pax,
            max_pax: 6,
            additional_pax_fee: dec(fee),
        }
    }

    #[test]
    fn test_no_children_counts_everyone() {
        assert_eq!(billable_pax(3, 0), 3);
    }

    #[test]
    fn test_one_child_is_free() {
        assert_eq!(billable_pax(2, 1), 2);
    }

    #[test]
    fn test_only_one_child_is_free_in_large_party() {
        assert_eq!(billable_pax(2, 4), 5);
    }

    #[test]
    fn test_party_within_base_pax_has_no_surcharge() {
        let result = calculate_pax_surcharge(&create_type(2, "300"), 2, 1, 3);
        assert_eq!(result.extra_pax, 0);
        assert_eq!(result.per_night, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_surcharge_scales_with_nights() {
        let result = calculate_pax_surcharge(&create_type(2, "300"), 3, 2, 4);
        assert_eq!(result.billable_pax, 4);
        assert_eq!(result.extra_pax, 2);
        assert_eq!(result.per_night, dec("600"));
        assert_eq!(result.total, dec("2400"));
    }

    #[test]
    fn test_zero_nights_has_zero_total() {
        let result = calculate_pax_surcharge(&create_type(2, "300"), 5, 0, 0);
        assert_eq!(result.extra_pax, 3);
        assert_eq!(result.per_night, dec("900"));
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_over_capacity_is_not_rejected() {
        // max_pax is 6; 10 adults still price.
        let result = calculate_pax_surcharge(&create_type(2, "300"), 10, 0, 1);
        assert_eq!(result.extra_pax, 8);
        assert_eq!(result.total, dec("2400"));
    }

    #[test]
    fn test_zero_guests_is_computed_not_rejected() {
        let result = calculate_pax_surcharge(&create_type(2, "300"), 0, 0, 2);
        assert_eq!(result.billable_pax, 0);
        assert_eq!(result.extra_pax, 0);
    }
}
