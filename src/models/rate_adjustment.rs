//! Rate adjustment model.
//!
//! A [`RateAdjustment`] is a time-bounded pricing override: a percentage
//! discount, a percentage surcharge, or a fixed replacement rate. Which
//! accommodation types it covers is expressed by [`AppliesTo`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an adjustment changes a night's base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Subtract `value` percent of the base rate.
    PercentageDiscount,
    /// Add `value` percent of the base rate.
    PercentageSurcharge,
    /// Replace the base rate with `value` outright.
    FixedOverride,
}

/// The set of accommodation types an adjustment covers.
///
/// `Specific` with an empty set covers nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliesTo {
    /// Every accommodation type.
    All,
    /// Only the listed accommodation type ids.
    Specific(BTreeSet<String>),
}

impl AppliesTo {
    /// Returns true if the adjustment covers the given accommodation type.
    pub fn covers(&self, type_id: &str) -> bool {
        match self {
            AppliesTo::All => true,
            AppliesTo::Specific(ids) => ids.contains(type_id),
        }
    }
}

/// A date-bounded override applied on top of the base rate.
///
/// On the wire the record keeps its flat storage shape
/// (`applies_to: all | specific` plus `accommodation_type_ids`), so rows
/// fetched from the backing store deserialize without reshaping.
///
/// # Example
///
/// ```
/// use stay_pricing::models::{AdjustmentKind, AppliesTo, RateAdjustment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let promo = RateAdjustment {
///     name: "Rainy Season Promo".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
///     kind: AdjustmentKind::PercentageDiscount,
///     value: Decimal::new(20, 0),
///     applies_to: AppliesTo::All,
///     is_active: true,
/// };
/// assert!(promo.applies(NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(), "any_type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RateAdjustmentRecord", into = "RateAdjustmentRecord")]
pub struct RateAdjustment {
    /// Display name, echoed into each affected night.
    pub name: String,
    /// First covered date (inclusive).
    pub start_date: NaiveDate,
    /// Last covered date (inclusive).
    pub end_date: NaiveDate,
    /// How the adjustment changes the rate.
    pub kind: AdjustmentKind,
    /// Percentage points, or an absolute amount for [`AdjustmentKind::FixedOverride`].
    pub value: Decimal,
    /// The accommodation types covered.
    pub applies_to: AppliesTo,
    /// Inactive adjustments never apply.
    pub is_active: bool,
}

impl RateAdjustment {
    /// Returns true if the adjustment is active, covers `date` and covers the type.
    pub fn applies(&self, date: NaiveDate, type_id: &str) -> bool {
        self.is_active
            && self.start_date <= date
            && date <= self.end_date
            && self.applies_to.covers(type_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AppliesToScope {
    All,
    Specific,
}

/// Flat storage shape of a rate adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RateAdjustmentRecord {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    adjustment_type: AdjustmentKind,
    adjustment_value: Decimal,
    applies_to: AppliesToScope,
    #[serde(default)]
    accommodation_type_ids: Vec<String>,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<RateAdjustmentRecord> for RateAdjustment {
    fn from(record: RateAdjustmentRecord) -> Self {
        let applies_to = match record.applies_to {
            AppliesToScope::All => AppliesTo::All,
            AppliesToScope::Specific => {
                AppliesTo::Specific(record.accommodation_type_ids.into_iter().collect())
            }
        };

        RateAdjustment {
            name: record.name,
            start_date: record.start_date,
            end_date: record.end_date,
            kind: record.adjustment_type,
            value: record.adjustment_value,
            applies_to,
            is_active: record.is_active,
        }
    }
}

impl From<RateAdjustment> for RateAdjustmentRecord {
    fn from(adjustment: RateAdjustment) -> Self {
        let (applies_to, accommodation_type_ids) = match adjustment.applies_to {
            AppliesTo::All => (AppliesToScope::All, Vec::new()),
            AppliesTo::Specific(ids) => (AppliesToScope::Specific, ids.into_iter().collect()),
        };

        RateAdjustmentRecord {
            name: adjustment.name,
            start_date: adjustment.start_date,
            end_date: adjustment.end_date,
            adjustment_type: adjustment.kind,
            adjustment_value: adjustment.value,
            applies_to,
            accommodation_type_ids,
            is_active: adjustment.is_active,
        }
    }
}
