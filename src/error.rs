//! Error types for the salary report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts report generation or configuration loading.

use thiserror::Error;

/// The main error type for the salary report engine.
///
/// Only fatal conditions are represented here. Malformed records that the
/// engine recovers from are reported as [`crate::models::SkippedRecord`]s instead.
///
/// # Example
///
/// ```
/// use salary_report::error::ReportError;
///
/// let error = ReportError::InvalidDate {
///     field: "date_from".to_string(),
///     value: "2019-04-01".to_string(),
///     message: "expected dd.MM.yyyy".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date in date_from '2019-04-01': expected dd.MM.yyyy"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A period bound or record date did not match `dd.MM.yyyy` or does not exist.
    #[error("Invalid date in {field} '{value}': {message}")]
    InvalidDate {
        /// Where the date came from (`date_from`, `date_to` or `record[<index>]`).
        field: String,
        /// The offending text.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A numeric record field could not be parsed under the fail-fast policy.
    #[error("Invalid {field} in record {index}: '{value}' is not an integer")]
    InvalidNumber {
        /// Zero-based index of the record in the input.
        index: usize,
        /// The field name (`hours` or `rate`).
        field: String,
        /// The offending text.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration could not be parsed.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The path (or `<inline>`) of the configuration that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
