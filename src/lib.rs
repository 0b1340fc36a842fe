//! Attendance-to-payroll engine for monthly salaried staff
//!
//! This crate turns a month of check-in/check-out records into per-day
//! attendance statuses, worked and overtime minutes, and the month's salary:
//! pro-rated base pay, overtime pay at a configurable multiplier, and the
//! net amount payable.
//!
//! The engine is pure and synchronous. Every employee-month is computed
//! independently from an in-memory snapshot, so whole organisations can be
//! run in parallel.
//!
//! # Example
//!
//! ```
//! use attendance_payroll::calculation::calculate_payroll;
//! use attendance_payroll::models::{
//!     AttendanceRecord, EmployeeMonthInput, PayrollOptions, ShiftProfile,
//! };
//! use chrono::{NaiveDate, NaiveTime};
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
//! let input = EmployeeMonthInput {
//!     employee_id: "emp_001".to_string(),
//!     month: "2026-06".parse().unwrap(),
//!     shift: ShiftProfile {
//!         shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!         shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
//!         duty_hours_per_day: Decimal::new(8, 0),
//!         monthly_salary: Decimal::new(30000, 0),
//!     },
//!     records: vec![AttendanceRecord::legacy("emp_001", date, Some("09:00"), Some("13:00"))],
//! };
//!
//! let result = calculate_payroll(&input, &PayrollOptions::default()).unwrap();
//! assert_eq!(result.summary.base_salary, Decimal::new(500, 0));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
