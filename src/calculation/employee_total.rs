//! Per-employee salary totals.
//!
//! This module sums earnings for one employee over a period from a set of
//! pre-split record lines.

use tracing::warn;

use crate::config::NumericFieldPolicy;
use crate::error::ReportResult;
use crate::models::{EmployeeSalaryLine, Period};

use super::record_parser::RecordLine;

/// Calculates one employee's total earnings within a period.
///
/// Lines are visited in order. For each line:
/// 1. Malformed lines are ignored, except that an invalid number aborts under
///    [`NumericFieldPolicy::FailFast`]
/// 2. Lines for other employees are ignored without looking at their date
/// 3. The date is parsed, and `hours * rate` is added if it lies in the period
///
/// `name` is trimmed before comparison and in the returned line.
///
/// # Errors
///
/// Returns the first fatal error met in line order: `InvalidDate` for a
/// matching record with a malformed date, or `InvalidNumber` under fail-fast.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::{calculate_employee_total, parse_record_line};
/// use salary_report::config::NumericFieldPolicy;
/// use salary_report::models::Period;
/// use chrono::NaiveDate;
///
/// let lines = vec![
///     parse_record_line(0, "12.04.2019 John 80 25"),
///     parse_record_line(1, "01.05.2019 John 80 25"),
/// ];
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2019, 4, 30).unwrap(),
/// );
///
/// let line = calculate_employee_total(" John ", &lines, &period, NumericFieldPolicy::Skip)?;
/// assert_eq!(line.to_string(), "John - 2000");
/// # Ok::<(), salary_report::error::ReportError>(())
/// ```
pub fn calculate_employee_total(
    name: &str,
    lines: &[RecordLine<'_>],
    period: &Period,
    policy: NumericFieldPolicy,
) -> ReportResult<EmployeeSalaryLine> {
    let name = name.trim();
    let mut total: i64 = 0;

    for line in lines {
        let fields = match line {
            RecordLine::Fields(fields) => fields,
            RecordLine::Malformed(_) => match (policy, line.fail_fast_error()) {
                (NumericFieldPolicy::FailFast, Some(error)) => {
                    warn!(employee = %name, error = %error, "Aborting report on invalid number");
                    return Err(error);
                }
                _ => continue,
            },
        };

        if fields.name != name {
            continue;
        }

        let record = fields.resolve()?;
        if period.contains(record.date) {
            total += record.earnings();
        }
    }

    Ok(EmployeeSalaryLine {
        name: name.to_string(),
        total,
    })
}
