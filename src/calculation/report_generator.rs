//! Salary report generation.
//!
//! This module ties the pieces together: parse the period, split every record
//! line once, compute a total for each requested name, and render the result.

use tracing::{debug, info};

use crate::config::{ConfigLoader, ReportConfig};
use crate::error::ReportResult;
use crate::models::{SalaryReport, SkippedRecord};

use super::date_format::parse_period;
use super::employee_total::calculate_employee_total;
use super::record_parser::{RecordLine, parse_record_line};

/// Generates salary reports with a fixed configuration.
///
/// A generator holds no per-report state and can be shared freely between
/// threads.
///
/// # Example
///
/// ```
/// use salary_report::calculation::ReportGenerator;
/// use salary_report::config::{LineSeparator, ReportConfig};
///
/// let generator = ReportGenerator::new(ReportConfig {
///     line_separator: LineSeparator::Lf,
///     ..ReportConfig::default()
/// });
///
/// let report = generator.generate(
///     &["John", "Alice"],
///     &["12.04.2019 John 80 25", "10.04.2019 Alice 100 30", "bad line"],
///     "01.04.2019",
///     "30.04.2019",
/// )?;
///
/// assert_eq!(report.lines[1].total, 3000);
/// assert_eq!(report.skipped.len(), 1);
/// assert_eq!(
///     generator.render(&report),
///     "Report for period 01.04.2019 - 30.04.2019\nJohn - 2000\nAlice - 3000"
/// );
/// # Ok::<(), salary_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Creates a generator from loaded configuration.
    pub fn from_loader(loader: &ConfigLoader) -> Self {
        Self::new(*loader.config())
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Builds a structured salary report.
    ///
    /// One [`crate::models::EmployeeSalaryLine`] is produced per entry in
    /// `names`, in order, duplicates included. Record lines are split once and
    /// shared across all names.
    ///
    /// # Errors
    ///
    /// Fails without a partial report if:
    /// - `date_from` or `date_to` is not a valid `dd.MM.yyyy` date
    /// - a record belonging to a requested name has a malformed date
    /// - a record has a non-integer hours or rate field and the numeric policy
    ///   is fail-fast (only when at least one name is requested)
    pub fn generate<N, R>(
        &self,
        names: &[N],
        records: &[R],
        date_from: &str,
        date_to: &str,
    ) -> ReportResult<SalaryReport>
    where
        N: AsRef<str>,
        R: AsRef<str>,
    {
        let period = parse_period(date_from, date_to)?;
        if period.is_reversed() {
            debug!(
                start = %period.start,
                end = %period.end,
                "Period is reversed, every total will be zero"
            );
        }

        let record_lines: Vec<RecordLine<'_>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| parse_record_line(index, record.as_ref()))
            .collect();

        let lines = names
            .iter()
            .map(|name| {
                calculate_employee_total(
                    name.as_ref(),
                    &record_lines,
                    &period,
                    self.config.numeric_field_policy,
                )
            })
            .collect::<ReportResult<Vec<_>>>()?;

        let skipped: Vec<SkippedRecord> = record_lines
            .into_iter()
            .filter_map(|line| match line {
                RecordLine::Malformed(skipped) => Some(skipped),
                RecordLine::Fields(_) => None,
            })
            .collect();

        info!(
            names = names.len(),
            records = records.len(),
            skipped = skipped.len(),
            "Generated salary report"
        );

        Ok(SalaryReport {
            date_from: date_from.trim().to_string(),
            date_to: date_to.trim().to_string(),
            period,
            lines,
            skipped,
        })
    }

    /// Renders a report with the configured line separator.
    pub fn render(&self, report: &SalaryReport) -> String {
        report.render(self.config.line_separator.as_str())
    }

    /// Builds and renders a report in one step.
    ///
    /// # Errors
    ///
    /// See [`ReportGenerator::generate`].
    pub fn generate_text<N, R>(
        &self,
        names: &[N],
        records: &[R],
        date_from: &str,
        date_to: &str,
    ) -> ReportResult<String>
    where
        N: AsRef<str>,
        R: AsRef<str>,
    {
        let report = self.generate(names, records, date_from, date_to)?;
        Ok(self.render(&report))
    }
}

/// Generates a salary report with the default configuration.
///
/// Malformed numeric fields are skipped and lines are joined with the platform
/// line separator.
///
/// # Errors
///
/// See [`ReportGenerator::generate`].
///
/// # Examples
///
/// ```
/// use salary_report::calculation::generate_report;
///
/// let report = generate_report(
///     &["John"],
///     &["12.04.2019 John 80 25"],
///     "01.04.2019",
///     "30.04.2019",
/// )?;
///
/// let mut lines = report.lines();
/// assert_eq!(lines.next(), Some("Report for period 01.04.2019 - 30.04.2019"));
/// assert_eq!(lines.next(), Some("John - 2000"));
/// assert_eq!(lines.next(), None);
/// # Ok::<(), salary_report::error::ReportError>(())
/// ```
pub fn generate_report<N, R>(
    names: &[N],
    records: &[R],
    date_from: &str,
    date_to: &str,
) -> ReportResult<String>
where
    N: AsRef<str>,
    R: AsRef<str>,
{
    ReportGenerator::default().generate_text(names, records, date_from, date_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LineSeparator, NumericFieldPolicy};
    use crate::error::ReportError;
    use crate::models::SkipReason;

    fn lf_generator() -> ReportGenerator {
        ReportGenerator::new(ReportConfig {
            line_separator: LineSeparator::Lf,
            ..ReportConfig::default()
        })
    }

    fn fail_fast_generator() -> ReportGenerator {
        ReportGenerator::new(ReportConfig {
            numeric_field_policy: NumericFieldPolicy::FailFast,
            line_separator: LineSeparator::Lf,
        })
    }

    #[test]
    fn test_single_employee_report() {
        let text = lf_generator()
            .generate_text(&["John"], &["12.04.2019 John 80 25"], "01.04.2019", "30.04.2019")
            .unwrap();
        assert_eq!(text, "Report for period 01.04.2019 - 30.04.2019\nJohn - 2000");
    }

    #[test]
    fn test_header_uses_trimmed_bounds() {
        let report = lf_generator()
            .generate(&["John"], &[] as &[&str], " 01.04.2019 ", "30.04.2019\n")
            .unwrap();
        assert_eq!(report.header(), "Report for period 01.04.2019 - 30.04.2019");
    }

    #[test]
    fn test_no_names_renders_header_only() {
        let text = lf_generator()
            .generate_text(&[] as &[&str], &["12.04.2019 John 80 25"], "01.04.2019", "30.04.2019")
            .unwrap();
        assert_eq!(text, "Report for period 01.04.2019 - 30.04.2019");
    }

    #[test]
    fn test_duplicate_names_are_repeated() {
        let report = lf_generator()
            .generate(
                &["John", " John"],
                &["12.04.2019 John 80 25"],
                "01.04.2019",
                "30.04.2019",
            )
            .unwrap();
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0], report.lines[1]);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let names = vec!["John".to_string()];
        let records = vec!["12.04.2019 John 80 25".to_string()];
        let report = lf_generator()
            .generate(&names, &records, "01.04.2019", "30.04.2019")
            .unwrap();
        assert_eq!(report.lines[0].total, 2000);
    }

    #[test]
    fn test_skipped_records_listed_once_in_order() {
        let report = lf_generator()
            .generate(
                &["John", "Alice"],
                &["bad line", "12.04.2019 John 80 25", "12.04.2019 John x 25"],
                "01.04.2019",
                "30.04.2019",
            )
            .unwrap();
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].index, 0);
        assert_eq!(report.skipped[0].reason, SkipReason::TooFewFields { found: 2 });
        assert_eq!(report.skipped[1].index, 2);
    }

    #[test]
    fn test_invalid_date_from_is_fatal() {
        let result = lf_generator().generate_text(&["John"], &["12.04.2019 John 80 25"], "1.4.2019", "30.04.2019");
        match result {
            Err(ReportError::InvalidDate { field, .. }) => assert_eq!(field, "date_from"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_date_aborts_whole_report() {
        let result = lf_generator().generate(
            &["John", "Alice"],
            &["10.04.2019 John 80 25", "31.04.2019 Alice 100 30"],
            "01.04.2019",
            "30.04.2019",
        );
        match result {
            Err(ReportError::InvalidDate { field, value, .. }) => {
                assert_eq!(field, "record[1]");
                assert_eq!(value, "31.04.2019");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_fast_policy_aborts_on_invalid_number() {
        let result = fail_fast_generator().generate(
            &["John"],
            &["12.04.2019 John 80 25", "12.04.2019 Bob 8 rate"],
            "01.04.2019",
            "30.04.2019",
        );
        assert!(matches!(result, Err(ReportError::InvalidNumber { index: 1, .. })));
    }

    #[test]
    fn test_fail_fast_policy_without_names_succeeds() {
        let report = fail_fast_generator()
            .generate(&[] as &[&str], &["12.04.2019 Bob 8 rate"], "01.04.2019", "30.04.2019")
            .unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_crlf_separator() {
        let generator = ReportGenerator::new(ReportConfig {
            line_separator: LineSeparator::Crlf,
            ..ReportConfig::default()
        });
        let text = generator
            .generate_text(&["A", "B"], &[] as &[&str], "01.01.2020", "31.12.2020")
            .unwrap();
        assert_eq!(text, "Report for period 01.01.2020 - 31.12.2020\r\nA - 0\r\nB - 0");
    }

    #[test]
    fn test_from_loader_uses_loaded_config() {
        let loader = ConfigLoader::from_yaml_str("numeric_field_policy: fail_fast").unwrap();
        let generator = ReportGenerator::from_loader(&loader);
        assert_eq!(
            generator.config().numeric_field_policy,
            NumericFieldPolicy::FailFast
        );
    }

    #[test]
    fn test_generate_report_matches_default_generator() {
        let names = ["John"];
        let records = ["12.04.2019 John 80 25"];
        let expected = ReportGenerator::default()
            .generate_text(&names, &records, "01.04.2019", "30.04.2019")
            .unwrap();
        assert_eq!(
            generate_report(&names, &records, "01.04.2019", "30.04.2019").unwrap(),
            expected
        );
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportGenerator>();
    }
}
