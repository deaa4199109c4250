//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML. Every field is optional and falls back to its default.

use serde::{Deserialize, Serialize};

/// What to do with a record whose hours or rate field is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFieldPolicy {
    /// Ignore the record and continue, like a record with too few fields.
    #[default]
    Skip,
    /// Abort the whole report with [`crate::error::ReportError::InvalidNumber`].
    FailFast,
}

/// The separator placed between report lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSeparator {
    /// The separator native to the target platform.
    #[default]
    Platform,
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineSeparator {
    /// Returns the separator text.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_report::config::LineSeparator;
    ///
    /// assert_eq!(LineSeparator::Lf.as_str(), "\n");
    /// assert_eq!(LineSeparator::Crlf.as_str(), "\r\n");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineSeparator::Lf => "\n",
            LineSeparator::Crlf => "\r\n",
        }
    }
}

/// Settings for a [`crate::calculation::ReportGenerator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Handling of non-integer hours or rate fields.
    pub numeric_field_policy: NumericFieldPolicy,
    /// Separator between report lines.
    pub line_separator: LineSeparator,
}
