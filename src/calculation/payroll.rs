//! End-to-end payroll computation for one employee-month.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, ClassifiedDay, EmployeeMonthInput, PayrollOptions, PayrollResult,
};

use super::aggregator::aggregate_month;
use super::audit::{day_step, month_totals_step, pay_rates_step};
use super::day_classifier::classify_record;

/// Version stamped on every result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Computes the payroll of one employee for one month.
///
/// The steps are:
/// 1. validate the shift profile and options,
/// 2. check every record belongs to the employee and month, once per date,
/// 3. normalise and classify each record (bad punch data degrades that day
///    to ABSENT with a warning),
/// 4. price the days and fold the month totals.
///
/// Days in the result are sorted by date.
///
/// # Errors
///
/// - [`EngineError::ConfigError`] for an invalid shift profile or options.
/// - [`EngineError::InputMismatch`] for a record of another employee, a date
///   outside the month, or a second record for the same date.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::calculate_payroll;
/// use attendance_payroll::models::{
///     AttendanceRecord, EmployeeMonthInput, PayrollOptions, ShiftProfile,
/// };
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let input = EmployeeMonthInput {
///     employee_id: "emp_001".to_string(),
///     month: "2026-06".parse().unwrap(),
///     shift: ShiftProfile {
///         shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///         shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///         duty_hours_per_day: Decimal::new(8, 0),
///         monthly_salary: Decimal::new(24000, 0),
///     },
///     records: vec![AttendanceRecord::legacy(
///         "emp_001",
///         NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///         Some("09:00"),
///         Some("18:00"),
///     )],
/// };
///
/// let result = calculate_payroll(&input, &PayrollOptions::default()).unwrap();
/// assert_eq!(result.summary.overtime_amount, Decimal::new(150, 0));
/// assert_eq!(result.summary.net_salary, Decimal::new(950, 0));
/// ```
pub fn calculate_payroll(
    input: &EmployeeMonthInput,
    options: &PayrollOptions,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();

    input.shift.validate()?;
    options.validate()?;
    validate_records(input)?;

    let mut classified: Vec<ClassifiedDay> = input
        .records
        .iter()
        .map(|record| classify_record(record, &input.shift))
        .collect();
    classified.sort_by_key(|day| day.date);

    let breakdown = aggregate_month(input.month, &classified, &input.shift, options)?;

    let shift_minutes = input.shift.shift_minutes()?;
    let mut steps = Vec::with_capacity(breakdown.days.len() + 2);
    let mut step_number: u32 = 1;
    steps.push(pay_rates_step(
        step_number,
        input.month,
        &input.shift,
        &breakdown.summary,
    ));
    for day in &breakdown.days {
        step_number += 1;
        steps.push(day_step(step_number, day, shift_minutes));
    }
    step_number += 1;
    steps.push(month_totals_step(step_number, &breakdown.summary));

    let warnings = breakdown
        .days
        .iter()
        .flat_map(|day| day.warnings.iter().cloned())
        .collect();

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        employee_id = %input.employee_id,
        month = %input.month,
        records = input.records.len(),
        present_days = breakdown.summary.present_days,
        net_salary = %breakdown.summary.net_salary.round_dp(2),
        duration_us,
        "Payroll calculation completed"
    );

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee_id: input.employee_id.clone(),
        month: input.month,
        days: breakdown.days,
        summary: breakdown.summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn validate_records(input: &EmployeeMonthInput) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(input.records.len());
    for record in &input.records {
        let mismatch = |message: String| EngineError::InputMismatch {
            employee_id: record.employee_id.clone(),
            date: record.date,
            message,
        };

        if record.employee_id != input.employee_id {
            return Err(mismatch(format!(
                "expected employee '{}'",
                input.employee_id
            )));
        }
        if !input.month.contains(record.date) {
            return Err(mismatch(format!("date is outside {}", input.month)));
        }
        if !seen.insert(record.date) {
            return Err(mismatch("more than one record for this date".to_string()));
        }
    }
    Ok(())
}
