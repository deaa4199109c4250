//! Fixed-pattern date parsing.
//!
//! Every date the engine reads, whether a period bound or a record date, uses the
//! single pattern `dd.MM.yyyy`. This module validates the shape strictly (two-digit
//! day, two-digit month, four-digit year) and then converts it into a
//! [`NaiveDate`], rejecting dates that do not exist in the calendar.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{ReportError, ReportResult};
use crate::models::Period;

/// The human-readable date pattern accepted by the engine.
pub const DATE_PATTERN: &str = "dd.MM.yyyy";

/// The equivalent chrono format string.
const CHRONO_FORMAT: &str = "%d.%m.%Y";

/// Parses a `dd.MM.yyyy` date.
///
/// The input is not trimmed; callers trim before parsing. `field` names the
/// origin of the text and is carried into the error.
///
/// # Errors
///
/// Returns [`ReportError::InvalidDate`] if the text does not have the exact
/// `dd.MM.yyyy` shape or names a day that does not exist (e.g. `31.02.2019`).
///
/// # Examples
///
/// ```
/// use salary_report::calculation::parse_report_date;
/// use chrono::NaiveDate;
///
/// let date = parse_report_date("12.04.2019", "date_from").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2019, 4, 12).unwrap());
///
/// assert!(parse_report_date("2019-04-12", "date_from").is_err());
/// assert!(parse_report_date("1.4.2019", "date_from").is_err());
/// assert!(parse_report_date("29.02.2019", "date_from").is_err());
/// ```
pub fn parse_report_date(text: &str, field: &str) -> ReportResult<NaiveDate> {
    if !has_date_shape(text) {
        return Err(invalid_date(
            field,
            text,
            format!("expected {}", DATE_PATTERN),
        ));
    }

    // The shape check leaves only out-of-range day/month combinations to fail here
    NaiveDate::parse_from_str(text, CHRONO_FORMAT)
        .map_err(|e| invalid_date(field, text, format!("no such calendar date ({})", e)))
}

/// Formats a date with the `dd.MM.yyyy` pattern.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::format_report_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
/// assert_eq!(format_report_date(date), "01.04.2019");
/// ```
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(CHRONO_FORMAT).to_string()
}

/// Parses both period bounds after trimming them.
///
/// No ordering is enforced: a reversed period is returned as-is and simply
/// contains no dates.
///
/// # Errors
///
/// Returns [`ReportError::InvalidDate`] for the first bound that fails to parse,
/// checking `date_from` before `date_to`.
pub fn parse_period(date_from: &str, date_to: &str) -> ReportResult<Period> {
    let start = parse_report_date(date_from.trim(), "date_from")?;
    let end = parse_report_date(date_to.trim(), "date_to")?;
    Ok(Period::new(start, end))
}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == DATE_PATTERN.len()
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

fn invalid_date(field: &str, text: &str, message: String) -> ReportError {
    warn!(field = %field, value = %text, %message, "Rejected date");
    ReportError::InvalidDate {
        field: field.to_string(),
        value: text.to_string(),
        message,
    }
}
