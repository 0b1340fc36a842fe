//! Per-day pay calculation.
//!
//! This module prices a classified day: the share of monthly salary it earns
//! and the overtime pay for minutes beyond the contracted shift.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceStatus, ClassifiedDay};

use super::pay_rates::PayRates;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Calculates the salary a day earns.
///
/// - Complete, overtime and weekly-off days earn the full per-day salary.
/// - Incomplete days earn `per_day_salary × work_minutes / shift_minutes`.
/// - Absent days earn nothing.
///
/// # Errors
///
/// Returns [`EngineError::ConfigError`] if the pro-rated amount is too large
/// to represent.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::{calculate_day_salary, PayRates};
/// use attendance_payroll::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// let rates = PayRates {
///     days_in_month: 30,
///     per_day_salary: Decimal::new(1000, 0),
///     per_hour_salary: Decimal::new(125, 0),
///     shift_minutes: Decimal::new(480, 0),
/// };
///
/// let half_day = calculate_day_salary(AttendanceStatus::PresentIncomplete, 240, &rates).unwrap();
/// assert_eq!(half_day, Decimal::new(500, 0));
/// ```
pub fn calculate_day_salary(
    status: AttendanceStatus,
    work_minutes: i64,
    rates: &PayRates,
) -> EngineResult<Decimal> {
    match status {
        AttendanceStatus::PresentComplete
        | AttendanceStatus::PresentOvertime
        | AttendanceStatus::WeeklyOff => Ok(rates.per_day_salary),
        AttendanceStatus::PresentIncomplete => {
            if rates.shift_minutes <= Decimal::ZERO {
                return Ok(Decimal::ZERO);
            }
            rates
                .per_day_salary
                .checked_mul(Decimal::from(work_minutes.max(0)))
                .and_then(|amount| amount.checked_div(rates.shift_minutes))
                .ok_or_else(|| out_of_range("monthly_salary", "pro-rated day salary"))
        }
        AttendanceStatus::Absent => Ok(Decimal::ZERO),
    }
}

/// Calculates overtime pay: `overtime_minutes / 60 × per_hour_salary × multiplier`.
///
/// # Errors
///
/// Returns [`EngineError::ConfigError`] if the amount is too large to
/// represent.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::{calculate_ot_amount, PayRates};
/// use rust_decimal::Decimal;
///
/// let rates = PayRates {
///     days_in_month: 30,
///     per_day_salary: Decimal::new(800, 0),
///     per_hour_salary: Decimal::new(100, 0),
///     shift_minutes: Decimal::new(480, 0),
/// };
///
/// let amount = calculate_ot_amount(60, &rates, Decimal::new(15, 1)).unwrap();
/// assert_eq!(amount, Decimal::new(150, 0));
/// ```
pub fn calculate_ot_amount(
    overtime_minutes: i64,
    rates: &PayRates,
    multiplier: Decimal,
) -> EngineResult<Decimal> {
    if overtime_minutes <= 0 {
        return Ok(Decimal::ZERO);
    }
    (Decimal::from(overtime_minutes) / MINUTES_PER_HOUR)
        .checked_mul(rates.per_hour_salary)
        .and_then(|amount| amount.checked_mul(multiplier))
        .ok_or_else(|| out_of_range("overtime_multiplier", "overtime amount"))
}

/// Returns a copy of the day with `day_salary` and `ot_amount` filled in.
///
/// # Errors
///
/// Propagates the overflow errors of [`calculate_day_salary`] and
/// [`calculate_ot_amount`].
pub fn price_day(
    day: &ClassifiedDay,
    rates: &PayRates,
    multiplier: Decimal,
) -> EngineResult<ClassifiedDay> {
    Ok(ClassifiedDay {
        day_salary: calculate_day_salary(day.status, day.work_minutes, rates)?,
        ot_amount: calculate_ot_amount(day.overtime_minutes, rates, multiplier)?,
        ..day.clone()
    })
}

fn out_of_range(field: &str, figure: &str) -> EngineError {
    EngineError::ConfigError {
        field: field.to_string(),
        message: format!("{figure} is out of range"),
    }
}
