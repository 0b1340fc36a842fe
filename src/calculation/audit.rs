//! Audit step construction.
//!
//! Every figure in a [`crate::models::PayrollResult`] can be traced through
//! the audit steps built here: one for the derived rates, one per classified
//! day, and one for the month totals.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ClassifiedDay, MonthlyPayrollSummary, PayrollMonth, ShiftProfile};

/// Rule id of the pay-rate derivation step.
pub const PAY_RATES_RULE: &str = "pay_rates";
/// Rule id of each per-day classification step.
pub const DAY_CLASSIFICATION_RULE: &str = "day_classification";
/// Rule id of the month totals step.
pub const MONTH_TOTALS_RULE: &str = "month_totals";

/// Records how per-day and per-hour salary were derived.
pub fn pay_rates_step(
    step_number: u32,
    month: PayrollMonth,
    shift: &ShiftProfile,
    summary: &MonthlyPayrollSummary,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: PAY_RATES_RULE.to_string(),
        rule_name: "Pay Rate Derivation".to_string(),
        input: serde_json::json!({
            "month": month.to_string(),
            "monthly_salary": shift.monthly_salary.to_string(),
            "duty_hours_per_day": shift.duty_hours_per_day.to_string(),
        }),
        output: serde_json::json!({
            "days_in_month": summary.days_in_month,
            "per_day_salary": summary.per_day_salary.to_string(),
            "per_hour_salary": summary.per_hour_salary.to_string(),
        }),
        reasoning: format!(
            "{} / {} days = {} per day; / {}h = {} per hour",
            shift.monthly_salary,
            summary.days_in_month,
            summary.per_day_salary.round_dp(4),
            shift.duty_hours_per_day,
            summary.per_hour_salary.round_dp(4)
        ),
    }
}

/// Records the classification and pay of one day.
pub fn day_step(step_number: u32, day: &ClassifiedDay, shift_minutes: Decimal) -> AuditStep {
    let reasoning = if day.is_degraded() {
        format!(
            "{}: attendance data could not be read, counted as {}",
            day.date,
            day.status.as_str()
        )
    } else {
        format!(
            "{}: worked {} of {} shift minutes ({} overtime) -> {}",
            day.date,
            day.work_minutes,
            shift_minutes.normalize(),
            day.overtime_minutes,
            day.status.as_str()
        )
    };

    AuditStep {
        step_number,
        rule_id: DAY_CLASSIFICATION_RULE.to_string(),
        rule_name: "Day Classification".to_string(),
        input: serde_json::json!({
            "date": day.date.to_string(),
            "in_instant": day.in_instant.map(|t| t.to_string()),
            "out_instant": day.out_instant.map(|t| t.to_string()),
            "record_revision": day.record_revision,
        }),
        output: serde_json::json!({
            "status": day.status.as_str(),
            "work_minutes": day.work_minutes,
            "overtime_minutes": day.overtime_minutes,
            "day_salary": day.day_salary.to_string(),
            "ot_amount": day.ot_amount.to_string(),
        }),
        reasoning,
    }
}

/// Records the month totals.
pub fn month_totals_step(step_number: u32, summary: &MonthlyPayrollSummary) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: MONTH_TOTALS_RULE.to_string(),
        rule_name: "Month Totals".to_string(),
        input: serde_json::json!({
            "present_days": summary.present_days,
            "absent_days": summary.absent_days,
            "weekly_off_days": summary.weekly_off_days,
        }),
        output: serde_json::json!({
            "base_salary": summary.base_salary.to_string(),
            "overtime_amount": summary.overtime_amount.to_string(),
            "net_salary": summary.net_salary.to_string(),
        }),
        reasoning: format!(
            "base {} + overtime {} = net {}",
            summary.base_salary.round_dp(2),
            summary.overtime_amount.round_dp(2),
            summary.net_salary.round_dp(2)
        ),
    }
}
