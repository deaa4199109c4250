//! Reporting period model.
//!
//! This module contains the [`Period`] type that bounds which work records
//! contribute to a salary report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range used to filter work records.
///
/// No ordering is enforced between `start` and `end`. A reversed period is
/// valid to construct but contains no dates, so every total computed against it
/// is zero.
///
/// # Example
///
/// ```
/// use salary_report::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2019, 4, 30).unwrap(),
/// );
///
/// assert!(period.contains(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap())); // start date
/// assert!(period.contains(NaiveDate::from_ymd_opt(2019, 4, 30).unwrap())); // end date
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2019, 5, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The first day of the period (inclusive).
    pub start: NaiveDate,
    /// The last day of the period (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Creates a new period from its bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Checks if a given date falls within this period, inclusive of both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if `start` is after `end`.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}
