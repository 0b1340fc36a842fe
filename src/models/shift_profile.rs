//! Shift profile model.
//!
//! This module defines the [`ShiftProfile`] struct: the contracted daily shift
//! and monthly compensation terms of an employee for the month being computed.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_format::hh_mm;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Longest contracted shift accepted, in hours.
pub const MAX_DUTY_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// An employee's contracted shift and salary terms.
///
/// `duty_hours_per_day` is the denominator for both the hourly rate and the
/// overtime threshold, so it must be strictly positive. It cannot exceed
/// [`MAX_DUTY_HOURS_PER_DAY`].
///
/// # Example
///
/// ```
/// use attendance_payroll::models::ShiftProfile;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftProfile {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     duty_hours_per_day: Decimal::new(8, 0),
///     monthly_salary: Decimal::new(30000, 0),
/// };
/// assert!(shift.validate().is_ok());
/// assert_eq!(shift.shift_minutes().unwrap(), Decimal::new(480, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftProfile {
    /// Contracted start of the shift (time of day).
    #[serde(with = "hh_mm")]
    pub shift_start: NaiveTime,
    /// Contracted end of the shift (time of day).
    #[serde(with = "hh_mm")]
    pub shift_end: NaiveTime,
    /// Contracted shift length in hours.
    pub duty_hours_per_day: Decimal,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
}

impl ShiftProfile {
    /// Checks the profile can be used for pay calculation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigError`] if `duty_hours_per_day` is not in
    /// `(0, 24]` or `monthly_salary < 0`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.duty_hours_per_day <= Decimal::ZERO {
            return Err(EngineError::ConfigError {
                field: "duty_hours_per_day".to_string(),
                message: format!(
                    "must be greater than zero, got {}",
                    self.duty_hours_per_day.normalize()
                ),
            });
        }

        if self.duty_hours_per_day > MAX_DUTY_HOURS_PER_DAY {
            return Err(EngineError::ConfigError {
                field: "duty_hours_per_day".to_string(),
                message: format!(
                    "cannot exceed {} hours, got {}",
                    MAX_DUTY_HOURS_PER_DAY,
                    self.duty_hours_per_day.normalize()
                ),
            });
        }

        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::ConfigError {
                field: "monthly_salary".to_string(),
                message: format!(
                    "cannot be negative, got {}",
                    self.monthly_salary.normalize()
                ),
            });
        }

        Ok(())
    }

    /// The contracted shift length in minutes (`duty_hours_per_day × 60`).
    ///
    /// Kept as an exact decimal so fractional duty hours compare exactly
    /// against whole worked minutes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigError`] if the product does not fit in a
    /// `Decimal`.
    pub fn shift_minutes(&self) -> EngineResult<Decimal> {
        self.duty_hours_per_day
            .checked_mul(MINUTES_PER_HOUR)
            .ok_or_else(|| EngineError::ConfigError {
                field: "duty_hours_per_day".to_string(),
                message: "shift length in minutes is out of range".to_string(),
            })
    }
}
