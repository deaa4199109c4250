//! Work-record line parsing.
//!
//! A record line is `date name hours rate`, separated by runs of whitespace.
//! Parsing happens in two stages. [`parse_record_line`] splits the line and
//! parses the numeric fields, which is enough to decide whether the line is
//! usable at all. The date is only resolved later, by [`RecordFields::resolve`],
//! once the record is known to belong to a requested employee.

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{SkipReason, SkippedRecord, WorkRecord};

use super::date_format::parse_report_date;

/// The minimum number of whitespace-separated fields in a usable record line.
pub const MIN_RECORD_FIELDS: usize = 4;

const DATE_INDEX: usize = 0;
const NAME_INDEX: usize = 1;
const HOURS_INDEX: usize = 2;
const RATE_INDEX: usize = 3;

/// The fields of a record line whose shape and numbers are valid.
///
/// The date is kept as text until [`RecordFields::resolve`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    /// Zero-based index of the line in the input.
    pub index: usize,
    /// The unparsed date field.
    pub date: &'a str,
    /// The employee name field.
    pub name: &'a str,
    /// Hours worked.
    pub hours: i32,
    /// Pay per hour.
    pub rate: i32,
}

impl RecordFields<'_> {
    /// Parses the date field and returns the complete work record.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDate`] naming `record[<index>]` if the date
    /// field does not match `dd.MM.yyyy`.
    pub fn resolve(&self) -> ReportResult<WorkRecord> {
        let date = parse_report_date(self.date, &format!("record[{}]", self.index))?;
        Ok(WorkRecord {
            date,
            employee_name: self.name.to_string(),
            hours_worked: self.hours,
            hourly_rate: self.rate,
        })
    }
}

/// The outcome of splitting one record line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLine<'a> {
    /// The line has a usable shape and numeric fields.
    Fields(RecordFields<'a>),
    /// The line is malformed and contributes to no total.
    Malformed(SkippedRecord),
}

impl RecordLine<'_> {
    /// Returns the error this line raises under the fail-fast numeric policy,
    /// if any. Lines with too few fields never raise.
    pub fn fail_fast_error(&self) -> Option<ReportError> {
        match self {
            RecordLine::Malformed(SkippedRecord {
                index,
                reason: SkipReason::InvalidNumber { field, value },
            }) => Some(ReportError::InvalidNumber {
                index: *index,
                field: field.clone(),
                value: value.clone(),
            }),
            _ => None,
        }
    }
}

/// Splits a raw record line into its fields.
///
/// Leading and trailing whitespace is ignored and runs of whitespace between
/// fields collapse. Fields beyond the fourth are ignored.
///
/// # Examples
///
/// ```
/// use salary_report::calculation::{RecordLine, parse_record_line};
///
/// match parse_record_line(0, "  12.04.2019   John 80 25 ") {
///     RecordLine::Fields(fields) => {
///         assert_eq!(fields.name, "John");
///         assert_eq!(fields.hours * fields.rate, 2000);
///     }
///     RecordLine::Malformed(skipped) => panic!("unexpected skip: {:?}", skipped),
/// }
///
/// assert!(matches!(parse_record_line(1, "bad line"), RecordLine::Malformed(_)));
/// ```
pub fn parse_record_line(index: usize, line: &str) -> RecordLine<'_> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_RECORD_FIELDS {
        return malformed(index, SkipReason::TooFewFields {
            found: fields.len(),
        });
    }

    let hours = match parse_number(fields[HOURS_INDEX], "hours") {
        Ok(hours) => hours,
        Err(reason) => return malformed(index, reason),
    };
    let rate = match parse_number(fields[RATE_INDEX], "rate") {
        Ok(rate) => rate,
        Err(reason) => return malformed(index, reason),
    };

    RecordLine::Fields(RecordFields {
        index,
        date: fields[DATE_INDEX],
        name: fields[NAME_INDEX],
        hours,
        rate,
    })
}

fn parse_number(text: &str, field: &str) -> Result<i32, SkipReason> {
    text.parse::<i32>()
        .map_err(|_| SkipReason::InvalidNumber {
            field: field.to_string(),
            value: text.to_string(),
        })
}

fn malformed(index: usize, reason: SkipReason) -> RecordLine<'static> {
    debug!(record = index, reason = %reason, "Malformed record line");
    RecordLine::Malformed(SkippedRecord { index, reason })
}
