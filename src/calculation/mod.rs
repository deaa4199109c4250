//! Calculation logic for the salary report engine.
//!
//! This module contains the fixed-pattern date parser, the record line parser,
//! the per-employee total calculation, and the report generator that combines
//! them.

mod date_format;
mod employee_total;
mod record_parser;
mod report_generator;

pub use date_format::{DATE_PATTERN, format_report_date, parse_period, parse_report_date};
pub use employee_total::calculate_employee_total;
pub use record_parser::{MIN_RECORD_FIELDS, RecordFields, RecordLine, parse_record_line};
pub use report_generator::{ReportGenerator, generate_report};
