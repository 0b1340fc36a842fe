//! Input models for a payroll computation.
//!
//! This module defines [`EmployeeMonthInput`], the snapshot of one employee's
//! attendance for one month, and [`PayrollOptions`], the engine's tunables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{AttendanceRecord, PayrollMonth, ShiftProfile};

/// Default pay-rate multiplier for overtime minutes (1.5×).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Everything needed to compute one employee's payroll for one month.
///
/// The records are a consistent snapshot supplied by the caller; the engine
/// treats them as immutable.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{EmployeeMonthInput, ShiftProfile};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let input: EmployeeMonthInput = serde_json::from_str(r#"{
///     "employee_id": "emp_001",
///     "month": "2026-06",
///     "shift": {
///         "shift_start": "09:00",
///         "shift_end": "17:00",
///         "duty_hours_per_day": "8",
///         "monthly_salary": "30000"
///     },
///     "records": [
///         {"employee_id": "emp_001", "date": "2026-06-01", "first_in": "09:00", "last_out": "17:00"}
///     ]
/// }"#).unwrap();
/// assert_eq!(input.records.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthInput {
    /// The employee the payroll is for.
    pub employee_id: String,
    /// The month the payroll is for.
    pub month: PayrollMonth,
    /// The employee's shift and salary terms for the month.
    pub shift: ShiftProfile,
    /// Attendance records for the month, one per day at most.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// Tunable engine parameters for a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollOptions {
    /// Multiplier applied to the hourly rate for overtime minutes.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl Default for PayrollOptions {
    fn default() -> Self {
        Self {
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl PayrollOptions {
    /// Creates options with a specific overtime multiplier.
    pub fn with_overtime_multiplier(overtime_multiplier: Decimal) -> Self {
        Self {
            overtime_multiplier,
        }
    }

    /// Checks the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigError`] for a negative multiplier.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::ConfigError {
                field: "overtime_multiplier".to_string(),
                message: format!(
                    "cannot be negative, got {}",
                    self.overtime_multiplier.normalize()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_multiplier_is_one_and_a_half() {
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec("1.5"));
        assert_eq!(PayrollOptions::default().overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_options_missing_multiplier_uses_default() {
        let options: PayrollOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PayrollOptions::default());
    }

    #[test]
    fn test_negative_multiplier_rejected() {
        let options = PayrollOptions::with_overtime_multiplier(dec("-1"));
        assert!(matches!(
            options.validate(),
            Err(EngineError::ConfigError { field, .. }) if field == "overtime_multiplier"
        ));
    }

    #[test]
    fn test_zero_multiplier_allowed() {
        assert!(PayrollOptions::with_overtime_multiplier(Decimal::ZERO)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_input_without_records_defaults_to_empty() {
        let json = r#"{
            "employee_id": "emp_001",
            "month": "2026-02",
            "shift": {
                "shift_start": "09:00",
                "shift_end": "17:00",
                "duty_hours_per_day": "8",
                "monthly_salary": "28000"
            }
        }"#;
        let input: EmployeeMonthInput = serde_json::from_str(json).unwrap();
        assert!(input.records.is_empty());
        assert_eq!(input.month.days_in_month(), 28);
    }
}
