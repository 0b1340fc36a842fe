//! Pay rate derivation.
//!
//! This module derives the per-day and per-hour salary of an employee for a
//! given month from their monthly salary and contracted shift length.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollMonth, ShiftProfile};

/// Rates used to price every day of one employee-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// `monthly_salary / days_in_month`.
    pub per_day_salary: Decimal,
    /// `per_day_salary / duty_hours_per_day`.
    pub per_hour_salary: Decimal,
    /// Contracted shift length in minutes.
    pub shift_minutes: Decimal,
}

/// Derives the pay rates for an employee-month.
///
/// The day count always comes from the calendar month, so days without any
/// attendance record still dilute the per-day salary. The overtime rate is
/// derived from the per-day salary, the same figure used for base pay.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ConfigError`] if the shift profile is
/// invalid (for instance zero duty hours), before any division happens, or
/// if a derived rate is too large to represent.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::derive_pay_rates;
/// use attendance_payroll::models::ShiftProfile;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftProfile {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     duty_hours_per_day: Decimal::new(8, 0),
///     monthly_salary: Decimal::new(24000, 0),
/// };
///
/// let rates = derive_pay_rates("2026-06".parse().unwrap(), &shift).unwrap();
/// assert_eq!(rates.per_day_salary, Decimal::new(800, 0));
/// assert_eq!(rates.per_hour_salary, Decimal::new(100, 0));
/// ```
pub fn derive_pay_rates(month: PayrollMonth, shift: &ShiftProfile) -> EngineResult<PayRates> {
    shift.validate()?;

    let days_in_month = month.days_in_month();
    let per_day_salary = shift
        .monthly_salary
        .checked_div(Decimal::from(days_in_month))
        .ok_or_else(|| out_of_range("monthly_salary", "per-day salary"))?;
    let per_hour_salary = per_day_salary
        .checked_div(shift.duty_hours_per_day)
        .ok_or_else(|| out_of_range("duty_hours_per_day", "per-hour salary"))?;

    Ok(PayRates {
        days_in_month,
        per_day_salary,
        per_hour_salary,
        shift_minutes: shift.shift_minutes()?,
    })
}

fn out_of_range(field: &str, figure: &str) -> EngineError {
    EngineError::ConfigError {
        field: field.to_string(),
        message: format!("{figure} is out of range"),
    }
}
