//! Organisation-wide payroll runs.
//!
//! Every employee-month is independent, so a whole organisation is computed
//! with a [`rayon`] parallel iterator. A failure for one employee is recorded
//! on that employee's outcome and never aborts the others.

use std::time::Instant;

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{EmployeeMonthInput, PayrollOptions, PayrollResult};

use super::payroll::calculate_payroll;

/// The payroll outcome of one employee in an organisation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollOutcome {
    /// The employee the outcome is for.
    pub employee_id: String,
    /// The computed payroll, if the computation succeeded.
    pub result: Option<PayrollResult>,
    /// Why the computation failed, if it did.
    pub error: Option<String>,
}

impl EmployeePayrollOutcome {
    /// Returns true if the employee's payroll was computed.
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

/// Aggregate figures across an organisation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationTotals {
    /// Number of employees in the run.
    pub employees: usize,
    /// Employees whose payroll was computed.
    pub completed: usize,
    /// Employees whose payroll failed.
    pub failed: usize,
    /// Days counted as present, across all completed employees.
    pub present_days: u64,
    /// Days counted as absent, across all completed employees.
    pub absent_days: u64,
    /// Sum of base salaries.
    pub total_base_salary: Decimal,
    /// Sum of overtime amounts.
    pub total_overtime_amount: Decimal,
    /// Sum of net salaries.
    pub total_net_salary: Decimal,
}

/// The outcomes of an organisation run, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganisationPayroll {
    /// One outcome per input employee-month.
    pub results: Vec<EmployeePayrollOutcome>,
}

impl OrganisationPayroll {
    /// Sums the completed results and counts the failures.
    ///
    /// Salary sums saturate at [`Decimal::MAX`].
    pub fn totals(&self) -> OrganisationTotals {
        let mut totals = OrganisationTotals {
            employees: self.results.len(),
            completed: 0,
            failed: 0,
            present_days: 0,
            absent_days: 0,
            total_base_salary: Decimal::ZERO,
            total_overtime_amount: Decimal::ZERO,
            total_net_salary: Decimal::ZERO,
        };

        for outcome in &self.results {
            match &outcome.result {
                Some(result) => {
                    totals.completed += 1;
                    totals.present_days += u64::from(result.summary.present_days);
                    totals.absent_days += u64::from(result.summary.absent_days);
                    totals.total_base_salary =
                        totals.total_base_salary.saturating_add(result.summary.base_salary);
                    totals.total_overtime_amount = totals
                        .total_overtime_amount
                        .saturating_add(result.summary.overtime_amount);
                    totals.total_net_salary =
                        totals.total_net_salary.saturating_add(result.summary.net_salary);
                }
                None => totals.failed += 1,
            }
        }
        totals
    }

    /// Looks up the outcome of an employee.
    pub fn outcome_for(&self, employee_id: &str) -> Option<&EmployeePayrollOutcome> {
        self.results.iter().find(|o| o.employee_id == employee_id)
    }
}

/// Computes payroll for many employee-months in parallel.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::run_organisation_payroll;
/// use attendance_payroll::models::{EmployeeMonthInput, PayrollOptions, ShiftProfile};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftProfile {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     duty_hours_per_day: Decimal::new(8, 0),
///     monthly_salary: Decimal::new(30000, 0),
/// };
/// let broken = ShiftProfile { duty_hours_per_day: Decimal::ZERO, ..shift.clone() };
/// let inputs = vec![
///     EmployeeMonthInput { employee_id: "a".into(), month: "2026-06".parse().unwrap(), shift, records: vec![] },
///     EmployeeMonthInput { employee_id: "b".into(), month: "2026-06".parse().unwrap(), shift: broken, records: vec![] },
/// ];
///
/// let run = run_organisation_payroll(&inputs, &PayrollOptions::default());
/// assert!(run.results[0].is_success());
/// assert!(!run.results[1].is_success());
/// assert_eq!(run.totals().failed, 1);
/// ```
pub fn run_organisation_payroll(
    inputs: &[EmployeeMonthInput],
    options: &PayrollOptions,
) -> OrganisationPayroll {
    let start_time = Instant::now();

    let results: Vec<EmployeePayrollOutcome> = inputs
        .par_iter()
        .map(|input| match calculate_payroll(input, options) {
            Ok(result) => EmployeePayrollOutcome {
                employee_id: input.employee_id.clone(),
                result: Some(result),
                error: None,
            },
            Err(err) => {
                warn!(
                    employee_id = %input.employee_id,
                    month = %input.month,
                    error = %err,
                    "Payroll calculation failed for employee"
                );
                EmployeePayrollOutcome {
                    employee_id: input.employee_id.clone(),
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    let payroll = OrganisationPayroll { results };
    let totals = payroll.totals();
    info!(
        employees = totals.employees,
        failed = totals.failed,
        total_net_salary = %totals.total_net_salary.round_dp(2),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Organisation payroll run completed"
    );
    payroll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, ShiftProfile};
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(employee_id: &str, duty_hours: &str) -> EmployeeMonthInput {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        EmployeeMonthInput {
            employee_id: employee_id.to_string(),
            month: "2026-06".parse().unwrap(),
            shift: ShiftProfile {
                shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                duty_hours_per_day: dec(duty_hours),
                monthly_salary: dec("30000"),
            },
            records: vec![AttendanceRecord::legacy(
                employee_id,
                date,
                Some("09:00"),
                Some("17:00"),
            )],
        }
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let inputs: Vec<EmployeeMonthInput> = (0..50)
            .map(|i| create_input(&format!("emp_{i:03}"), "8"))
            .collect();

        let run = run_organisation_payroll(&inputs, &PayrollOptions::default());

        let ids: Vec<&str> = run.results.iter().map(|o| o.employee_id.as_str()).collect();
        let expected: Vec<&str> = inputs.iter().map(|i| i.employee_id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_one_failure_does_not_abort_the_run() {
        let inputs = vec![
            create_input("emp_001", "8"),
            create_input("emp_002", "0"),
            create_input("emp_003", "8"),
        ];

        let run = run_organisation_payroll(&inputs, &PayrollOptions::default());

        assert!(run.results[0].is_success());
        assert!(!run.results[1].is_success());
        assert!(run.results[1]
            .error
            .as_deref()
            .unwrap()
            .contains("duty_hours_per_day"));
        assert!(run.results[2].is_success());
    }

    #[test]
    fn test_unrepresentable_duty_hours_fail_only_that_employee() {
        let inputs = vec![
            create_input("emp_001", "8"),
            create_input("emp_002", "2000000000000000000000000000"),
            create_input("emp_003", "8"),
        ];

        let run = run_organisation_payroll(&inputs, &PayrollOptions::default());

        assert!(run.results[0].is_success());
        assert!(run.results[1]
            .error
            .as_deref()
            .unwrap()
            .contains("duty_hours_per_day"));
        assert!(run.results[2].is_success());
        assert_eq!(run.totals().failed, 1);
    }

    #[test]
    fn test_totals() {
        let inputs = vec![
            create_input("emp_001", "8"),
            create_input("emp_002", "0"),
            create_input("emp_003", "8"),
        ];

        let totals = run_organisation_payroll(&inputs, &PayrollOptions::default()).totals();

        assert_eq!(totals.employees, 3);
        assert_eq!(totals.completed, 2);
        assert_eq!(totals.failed, 1);
        assert_eq!(totals.present_days, 2);
        assert_eq!(totals.total_base_salary, dec("2000"));
        assert_eq!(totals.total_net_salary, dec("2000"));
    }

    #[test]
    fn test_totals_saturate() {
        let inputs: Vec<EmployeeMonthInput> = (0..40)
            .map(|i| {
                let mut input = create_input(&format!("emp_{i:03}"), "8");
                input.shift.monthly_salary = dec("70000000000000000000000000000");
                input
            })
            .collect();

        let totals = run_organisation_payroll(&inputs, &PayrollOptions::default()).totals();

        assert_eq!(totals.completed, 40);
        assert_eq!(totals.total_base_salary, Decimal::MAX);
        assert_eq!(totals.total_net_salary, Decimal::MAX);
    }

    #[test]
    fn test_outcome_lookup() {
        let run = run_organisation_payroll(
            &[create_input("emp_001", "8")],
            &PayrollOptions::default(),
        );
        assert!(run.outcome_for("emp_001").is_some());
        assert!(run.outcome_for("emp_404").is_none());
    }

    #[test]
    fn test_empty_run() {
        let run = run_organisation_payroll(&[], &PayrollOptions::default());
        assert!(run.results.is_empty());
        assert_eq!(run.totals().total_net_salary, Decimal::ZERO);
    }
}
