//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs of an employee-month computation:
//! the priced days, the month summary, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClassifiedDay, PayrollMonth};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application,
/// so every figure on a payslip can be traced back to its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate problems that did not stop the calculation but degraded
/// part of it (e.g. an unparseable punch turning a day absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Month totals for one employee, folded over the classified days.
///
/// `present_days` includes weekly-off days; `weekly_off_days` breaks them out
/// for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayrollSummary {
    /// Number of calendar days in the month (the pro-ration denominator).
    pub days_in_month: u32,
    /// Days counted as present (any PRESENT_* status or WEEKLY_OFF).
    pub present_days: u32,
    /// Days with status ABSENT.
    pub absent_days: u32,
    /// Days with status WEEKLY_OFF.
    pub weekly_off_days: u32,
    /// Total minutes worked.
    pub total_work_minutes: i64,
    /// Total overtime minutes.
    pub total_overtime_minutes: i64,
    /// Salary for one calendar day (`monthly_salary / days_in_month`).
    pub per_day_salary: Decimal,
    /// Salary for one contracted hour (`per_day_salary / duty_hours_per_day`).
    pub per_hour_salary: Decimal,
    /// Sum of day salaries.
    pub base_salary: Decimal,
    /// Sum of overtime amounts.
    pub overtime_amount: Decimal,
    /// `base_salary + overtime_amount`.
    pub net_salary: Decimal,
}

/// The priced days of a month together with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The priced days, in input order.
    pub days: Vec<ClassifiedDay>,
    /// The month totals.
    pub summary: MonthlyPayrollSummary,
}

/// The complete result of an employee-month payroll computation.
///
/// The envelope (`calculation_id`, `timestamp`) identifies the run; `days`
/// and `summary` are fully determined by the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The month the calculation is for.
    pub month: PayrollMonth,
    /// Priced days, sorted by date.
    pub days: Vec<ClassifiedDay>,
    /// Month totals.
    pub summary: MonthlyPayrollSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Days that were degraded because of bad input data.
    pub fn degraded_days(&self) -> impl Iterator<Item = &ClassifiedDay> {
        self.days.iter().filter(|d| d.is_degraded())
    }
}
