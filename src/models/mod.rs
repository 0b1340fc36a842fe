//! Core data models for the attendance payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod classified_day;
mod payroll_input;
mod payroll_month;
mod payroll_result;
mod shift_profile;
pub mod time_format;

pub(crate) use attendance::present;
pub use attendance::{AttendanceRecord, AttendanceStatus, ForcedStatus, RecordSource};
pub use classified_day::ClassifiedDay;
pub use payroll_input::{DEFAULT_OVERTIME_MULTIPLIER, EmployeeMonthInput, PayrollOptions};
pub use payroll_month::PayrollMonth;
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, MonthlyPayrollSummary, PayrollBreakdown, PayrollResult,
};
pub use shift_profile::{MAX_DUTY_HOURS_PER_DAY, ShiftProfile};
