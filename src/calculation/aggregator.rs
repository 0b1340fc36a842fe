//! Month aggregation.
//!
//! This module combines a month of classified days with the employee's
//! salary terms into per-day pay and month totals.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceStatus, ClassifiedDay, MonthlyPayrollSummary, PayrollBreakdown, PayrollMonth,
    PayrollOptions, ShiftProfile,
};

use super::day_pay::price_day;
use super::pay_rates::{PayRates, derive_pay_rates};

/// Prices every day of a month and folds the totals.
///
/// The shift profile and options are validated before anything is computed,
/// so an invalid profile never yields partial output. Days are priced in
/// input order; the day count used for pro-ration comes from `month`, not
/// from the records supplied.
///
/// # Errors
///
/// Returns [`EngineError::ConfigError`] if the shift profile or the
/// overtime multiplier is invalid, or if an amount is too large to
/// represent.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::aggregate_month;
/// use attendance_payroll::models::{
///     AttendanceStatus, ClassifiedDay, PayrollMonth, PayrollOptions, ShiftProfile,
/// };
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let month: PayrollMonth = "2026-06".parse().unwrap();
/// let shift = ShiftProfile {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     duty_hours_per_day: Decimal::new(8, 0),
///     monthly_salary: Decimal::new(30000, 0),
/// };
///
/// let mut day = ClassifiedDay::absent(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), 0);
/// day.status = AttendanceStatus::PresentIncomplete;
/// day.work_minutes = 240;
///
/// let breakdown = aggregate_month(month, &[day], &shift, &PayrollOptions::default()).unwrap();
/// assert_eq!(breakdown.days[0].day_salary, Decimal::new(500, 0));
/// assert_eq!(breakdown.summary.net_salary, Decimal::new(500, 0));
/// ```
pub fn aggregate_month(
    month: PayrollMonth,
    days: &[ClassifiedDay],
    shift: &ShiftProfile,
    options: &PayrollOptions,
) -> EngineResult<PayrollBreakdown> {
    options.validate()?;
    let rates = derive_pay_rates(month, shift)?;

    let priced = days
        .iter()
        .map(|day| price_day(day, &rates, options.overtime_multiplier))
        .collect::<EngineResult<Vec<ClassifiedDay>>>()?;
    let summary = summarize_month(&priced, &rates)?;

    Ok(PayrollBreakdown {
        days: priced,
        summary,
    })
}

/// Folds priced days into month totals.
///
/// # Errors
///
/// Returns [`EngineError::ConfigError`] if a salary total is too large to
/// represent.
pub fn summarize_month(
    days: &[ClassifiedDay],
    rates: &PayRates,
) -> EngineResult<MonthlyPayrollSummary> {
    let mut summary = MonthlyPayrollSummary {
        days_in_month: rates.days_in_month,
        present_days: 0,
        absent_days: 0,
        weekly_off_days: 0,
        total_work_minutes: 0,
        total_overtime_minutes: 0,
        per_day_salary: rates.per_day_salary,
        per_hour_salary: rates.per_hour_salary,
        base_salary: Decimal::ZERO,
        overtime_amount: Decimal::ZERO,
        net_salary: Decimal::ZERO,
    };

    for day in days {
        match day.status {
            AttendanceStatus::Absent => summary.absent_days += 1,
            AttendanceStatus::WeeklyOff => {
                summary.present_days += 1;
                summary.weekly_off_days += 1;
            }
            _ => summary.present_days += 1,
        }
        summary.total_work_minutes += day.work_minutes;
        summary.total_overtime_minutes += day.overtime_minutes;
        summary.base_salary = add_amount(summary.base_salary, day.day_salary, "monthly_salary")?;
        summary.overtime_amount =
            add_amount(summary.overtime_amount, day.ot_amount, "overtime_multiplier")?;
    }

    summary.net_salary = add_amount(summary.base_salary, summary.overtime_amount, "monthly_salary")?;
    Ok(summary)
}

fn add_amount(total: Decimal, amount: Decimal, field: &str) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| EngineError::ConfigError {
            field: field.to_string(),
            message: "month total is out of range".to_string(),
        })
}
