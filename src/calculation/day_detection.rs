//! Day detection and stay segmentation logic.
//!
//! This module provides utilities for classifying a calendar date as a
//! weekday or weekend night, and for splitting a stay into the individual
//! nights that are priced.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of night for base rate selection.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - the weekday rate applies.
    Weekday,
    /// Saturday and Sunday - the weekend rate applies.
    Weekend,
}

impl DayType {
    /// Returns true for [`DayType::Weekend`].
    pub fn is_weekend(self) -> bool {
        self == DayType::Weekend
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a calendar date.
///
/// Only the calendar date matters: there is no time zone or daylight-saving
/// handling.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Weekend);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Returns every night of a stay: the dates from `check_in` up to but
/// excluding `check_out`.
///
/// A `check_out` on or before `check_in` yields no nights.
///
/// # Example
///
/// ```
/// use stay_pricing::calculation::stay_nights;
/// use chrono::NaiveDate;
///
/// let check_in = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
///
/// let nights: Vec<NaiveDate> = stay_nights(check_in, check_out).collect();
/// assert_eq!(nights.len(), 2);
/// assert_eq!(nights[0], check_in);
/// ```
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    check_in
        .iter_days()
        .take_while(move |night| *night < check_out)
}
