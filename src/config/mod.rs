//! Configuration loading and management for the salary report engine.
//!
//! This module provides functionality to load report settings from YAML,
//! such as how malformed numeric fields are handled and which line separator
//! the rendered report uses.
//!
//! # Example
//!
//! ```no_run
//! use salary_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Numeric policy: {:?}", config.numeric_field_policy());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LineSeparator, NumericFieldPolicy, ReportConfig};
