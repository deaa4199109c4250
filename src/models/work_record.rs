//! Work record model.
//!
//! A [`WorkRecord`] is one fully parsed input line: the day worked, who worked
//! it, and the hours and hourly rate earned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One parsed work-record line.
///
/// # Example
///
/// ```
/// use salary_report::models::WorkRecord;
/// use chrono::NaiveDate;
///
/// let record = WorkRecord {
///     date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
///     employee_name: "John".to_string(),
///     hours_worked: 80,
///     hourly_rate: 25,
/// };
/// assert_eq!(record.earnings(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The day the work was done.
    pub date: NaiveDate,
    /// The employee's name, as written in the record.
    pub employee_name: String,
    /// Hours worked.
    pub hours_worked: i32,
    /// Pay per hour.
    pub hourly_rate: i32,
}

impl WorkRecord {
    /// Returns `hours_worked * hourly_rate`.
    ///
    /// The product of two `i32` values always fits in an `i64`.
    pub fn earnings(&self) -> i64 {
        i64::from(self.hours_worked) * i64::from(self.hourly_rate)
    }
}
