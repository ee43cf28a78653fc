//! Add-on pricing.
//!
//! Add-ons are priced once per stay, never per night. Per-person add-ons
//! count every guest, including the child exempt from occupancy counting.

use rust_decimal::Decimal;

use crate::models::{AddonLine, AddonSelection, PricingModel};

use super::money::saturating_sum;

/// The result of pricing a list of add-on selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonPricingResult {
    /// One line per selection, in input order.
    pub lines: Vec<AddonLine>,
    /// Sum of the line totals.
    pub total: Decimal,
}

/// Prices a single add-on selection for a party of `guests`.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::price_addon;
/// use stay_pricing::models::{Addon, AddonSelection, PricingModel};
/// use rust_decimal::Decimal;
///
/// let breakfast = AddonSelection::new(
///     Addon {
///         id: "breakfast".to_string(),
///         name: "Breakfast Buffet".to_string(),
///         price: Decimal::new(150, 0),
///         pricing_model: PricingModel::PerPerson,
///     },
///     1,
/// );
///
/// let line = price_addon(&breakfast, 3);
/// assert_eq!(line.line_total, Decimal::new(450, 0));
/// ```
pub fn price_addon(selection: &AddonSelection, guests: u32) -> AddonLine {
    let addon = &selection.addon;
    let counted_guests = match addon.pricing_model {
        PricingModel::PerPerson => guests,
        PricingModel::PerBooking => 1,
    };
    let line_total = addon
        .price
        .saturating_mul(Decimal::from(counted_guests))
        .saturating_mul(Decimal::from(selection.quantity));

    AddonLine {
        addon_id: addon.id.clone(),
        name: addon.name.clone(),
        pricing_model: addon.pricing_model,
        unit_price: addon.price,
        quantity: selection.quantity,
        guests: counted_guests,
        line_total,
    }
}

/// Prices every selection for a party of `guests` and sums the lines.
pub fn price_addons(selections: &[AddonSelection], guests: u32) -> AddonPricingResult {
    let lines: Vec<AddonLine> = selections
        .iter()
        .map(|selection| price_addon(selection, guests))
        .collect();
    let total = saturating_sum(lines.iter().map(|line| line.line_total));

    AddonPricingResult { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Addon;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_selection(id: &str, price: &str, model: PricingModel, quantity: u32) -> AddonSelection {
        AddonSelection::new(
            Addon {
                id: id.to_string(),
                name: id.replace('_', " "),
                price: dec(price),
                pricing_model: model,
            },
            quantity,
        )
    }

    #[test]
    fn test_per_person_counts_all_guests() {
        let line = price_addon(&create_selection("breakfast", "150", PricingModel::PerPerson, 1), 3);
        assert_eq!(line.guests, 3);
        assert_eq!(line.line_total, dec("450"));
    }

    #[test]
    fn test_per_person_scales_with_quantity() {
        let line = price_addon(&create_selection("kayak", "200", PricingModel::PerPerson, 2), 4);
        assert_eq!(line.line_total, dec("1600"));
    }

    #[test]
    fn test_per_booking_ignores_guest_count() {
        let line = price_addon(&create_selection("transfer", "500", PricingModel::PerBooking, 1), 6);
        assert_eq!(line.guests, 1);
        assert_eq!(line.line_total, dec("500"));
    }

    #[test]
    fn test_per_booking_scales_with_quantity() {
        let line = price_addon(&create_selection("cake", "750.50", PricingModel::PerBooking, 2), 2);
        assert_eq!(line.line_total, dec("1501"));
    }

    #[test]
    fn test_zero_quantity_is_zero() {
        let line = price_addon(&create_selection("spa", "1200", PricingModel::PerPerson, 0), 2);
        assert_eq!(line.line_total, Decimal::ZERO);
    }

    #[test]
    fn test_price_addons_sums_lines_in_order() {
        let selections = vec![
            create_selection("breakfast", "150", PricingModel::PerPerson, 1),
            create_selection("transfer", "500", PricingModel::PerBooking, 1),
        ];
        let result = price_addons(&selections, 2);

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].addon_id, "breakfast");
        assert_eq!(result.lines[1].addon_id, "transfer");
        assert_eq!(result.total, dec("800"));
    }

    #[test]
    fn test_no_selections_is_zero() {
        let result = price_addons(&[], 4);
        assert!(result.lines.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
    }
}
