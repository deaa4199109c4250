//! Core data models for the salary report engine.
//!
//! This module contains all the domain models used throughout the engine.

mod period;
mod salary_report;
mod work_record;

pub use period::Period;
pub use salary_report::{EmployeeSalaryLine, SalaryReport, SkipReason, SkippedRecord};
pub use work_record::WorkRecord;
