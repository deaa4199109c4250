//! Salary Report Engine
//!
//! This crate builds per-employee salary reports from plain-text work records
//! (`dd.MM.yyyy name hours rate`), restricted to an inclusive date period.
//!
//! # Example
//!
//! ```
//! use salary_report::generate_report;
//!
//! let report = generate_report(
//!     &["John", "Alice"],
//!     &["12.04.2019 John 80 25", "01.05.2019 John 80 25", "10.04.2019 Alice 100 30"],
//!     "01.04.2019",
//!     "30.04.2019",
//! )?;
//!
//! assert_eq!(
//!     report.lines().collect::<Vec<_>>(),
//!     ["Report for period 01.04.2019 - 30.04.2019", "John - 2000", "Alice - 3000"]
//! );
//! # Ok::<(), salary_report::error::ReportError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::{ReportGenerator, generate_report};
pub use error::{ReportError, ReportResult};
