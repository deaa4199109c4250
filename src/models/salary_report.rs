//! Salary report models.
//!
//! This module contains the [`SalaryReport`] type and its associated structures
//! that capture the outputs of report generation: one [`EmployeeSalaryLine`] per
//! requested name and the [`SkippedRecord`]s that were ignored along the way.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Period;

/// The total earned by one employee within the period.
///
/// # Example
///
/// ```
/// use salary_report::models::EmployeeSalaryLine;
///
/// let line = EmployeeSalaryLine {
///     name: "John".to_string(),
///     total: 2000,
/// };
/// assert_eq!(line.to_string(), "John - 2000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalaryLine {
    /// The trimmed employee name.
    pub name: String,
    /// Sum of `hours * rate` over the employee's records in the period.
    pub total: i64,
}

impl fmt::Display for EmployeeSalaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.total)
    }
}

/// Why a record line was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The line split into fewer than four whitespace-separated fields.
    TooFewFields {
        /// How many fields were found.
        found: usize,
    },
    /// The hours or rate field is not a 32-bit integer.
    InvalidNumber {
        /// The field name (`hours` or `rate`).
        field: String,
        /// The offending text.
        value: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => {
                write!(f, "expected at least 4 fields, found {}", found)
            }
            SkipReason::InvalidNumber { field, value } => {
                write!(f, "{} '{}' is not an integer", field, value)
            }
        }
    }
}

/// A record line that did not contribute to any total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Zero-based index of the line in the input.
    pub index: usize,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// The complete result of a report run.
///
/// `date_from` and `date_to` keep the trimmed text the caller supplied so the
/// header echoes the input exactly.
///
/// # Example
///
/// ```
/// use salary_report::models::{EmployeeSalaryLine, Period, SalaryReport};
/// use chrono::NaiveDate;
///
/// let report = SalaryReport {
///     date_from: "01.04.2019".to_string(),
///     date_to: "30.04.2019".to_string(),
///     period: Period::new(
///         NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2019, 4, 30).unwrap(),
///     ),
///     lines: vec![EmployeeSalaryLine { name: "John".to_string(), total: 2000 }],
///     skipped: vec![],
/// };
///
/// assert_eq!(
///     report.render("\n"),
///     "Report for period 01.04.2019 - 30.04.2019\nJohn - 2000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    /// The trimmed period start as supplied.
    pub date_from: String,
    /// The trimmed period end as supplied.
    pub date_to: String,
    /// The parsed period.
    pub period: Period,
    /// One line per requested name, in request order.
    pub lines: Vec<EmployeeSalaryLine>,
    /// Malformed record lines that were ignored, in input order.
    #[serde(default)]
    pub skipped: Vec<SkippedRecord>,
}

impl SalaryReport {
    /// Returns the header line.
    pub fn header(&self) -> String {
        format!("Report for period {} - {}", self.date_from, self.date_to)
    }

    /// Renders the report as text: the header followed by one line per
    /// employee, joined by `separator` with no trailing separator.
    pub fn render(&self, separator: &str) -> String {
        let mut report = self.header();
        for line in &self.lines {
            report.push_str(separator);
            report.push_str(&line.to_string());
        }
        report
    }

    /// Returns the sum of all employee totals.
    pub fn grand_total(&self) -> i64 {
        self.lines.iter().map(|l| l.total).sum()
    }

    /// Serializes the report to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
