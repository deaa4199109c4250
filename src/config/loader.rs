//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from YAML text or a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};

use super::types::{LineSeparator, NumericFieldPolicy, ReportConfig};

const INLINE_SOURCE: &str = "<inline>";

/// Loads and provides access to report configuration.
///
/// # Example
///
/// ```
/// use salary_report::config::{ConfigLoader, NumericFieldPolicy};
///
/// let loader = ConfigLoader::from_yaml_str("numeric_field_policy: fail_fast")?;
/// assert_eq!(loader.numeric_field_policy(), NumericFieldPolicy::FailFast);
/// # Ok::<(), salary_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it is not valid configuration YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_report::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/report.yaml")?;
    /// # Ok::<(), salary_report::error::ReportError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, path_str)
    }

    /// Loads configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` with path `<inline>` if the text is not valid
    /// configuration YAML.
    pub fn from_yaml_str(content: &str) -> ReportResult<Self> {
        Self::parse(content, INLINE_SOURCE.to_string())
    }

    fn parse(content: &str, source: String) -> ReportResult<Self> {
        // An empty document means "all defaults"
        let config = if content.trim().is_empty() {
            ReportConfig::default()
        } else {
            serde_yaml::from_str::<ReportConfig>(content).map_err(|e| {
                ReportError::ConfigParseError {
                    path: source.clone(),
                    message: e.to_string(),
                }
            })?
        };

        info!(
            source = %source,
            numeric_field_policy = ?config.numeric_field_policy,
            line_separator = ?config.line_separator,
            "Loaded report configuration"
        );

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the configured numeric-field policy.
    pub fn numeric_field_policy(&self) -> NumericFieldPolicy {
        self.config.numeric_field_policy
    }

    /// Returns the configured line separator.
    pub fn line_separator(&self) -> LineSeparator {
        self.config.line_separator
    }
}
