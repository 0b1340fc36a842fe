//! Salary slip construction.
//!
//! A [`SalarySlip`] is the rounded, presentation-ready view of a payroll
//! result. Engine figures stay unrounded; rounding happens only here.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::ExportConfig;
use crate::models::{PayrollMonth, PayrollResult, ShiftProfile};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// One employee's salary slip for one month.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::calculate_payroll;
/// use attendance_payroll::config::ExportConfig;
/// use attendance_payroll::export::SalarySlip;
/// use attendance_payroll::models::{EmployeeMonthInput, PayrollOptions, ShiftProfile};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let input = EmployeeMonthInput {
///     employee_id: "emp_001".to_string(),
///     month: "2026-07".parse().unwrap(),
///     shift: ShiftProfile {
///         shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///         shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///         duty_hours_per_day: Decimal::new(8, 0),
///         monthly_salary: Decimal::new(30000, 0),
///     },
///     records: vec![],
/// };
/// let result = calculate_payroll(&input, &PayrollOptions::default()).unwrap();
///
/// let slip = SalarySlip::from_result(&result, &input.shift, &ExportConfig::default());
/// assert_eq!(slip.per_day_salary, Decimal::new(96774, 2));
/// assert_eq!(slip.currency, "INR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// The employee the slip is for.
    pub employee_id: String,
    /// The month the slip is for.
    pub month: PayrollMonth,
    /// Currency code of every amount on the slip.
    pub currency: String,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Days counted as present, weekly-offs included.
    pub present_days: u32,
    /// Days counted as absent.
    pub absent_days: u32,
    /// Weekly-off days.
    pub weekly_off_days: u32,
    /// Hours worked.
    pub work_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Contracted monthly salary.
    pub monthly_salary: Decimal,
    /// Salary for one calendar day.
    pub per_day_salary: Decimal,
    /// Sum of day salaries.
    pub base_salary: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Amount payable.
    pub net_salary: Decimal,
}

impl SalarySlip {
    /// Builds a slip from a payroll result, rounding every figure to
    /// `export.decimal_places` with midpoint-away-from-zero rounding.
    pub fn from_result(result: &PayrollResult, shift: &ShiftProfile, export: &ExportConfig) -> Self {
        let dp = export.decimal_places;
        let summary = &result.summary;

        Self {
            employee_id: result.employee_id.clone(),
            month: result.month,
            currency: export.currency.clone(),
            days_in_month: summary.days_in_month,
            present_days: summary.present_days,
            absent_days: summary.absent_days,
            weekly_off_days: summary.weekly_off_days,
            work_hours: round(Decimal::from(summary.total_work_minutes) / MINUTES_PER_HOUR, dp),
            overtime_hours: round(
                Decimal::from(summary.total_overtime_minutes) / MINUTES_PER_HOUR,
                dp,
            ),
            monthly_salary: round(shift.monthly_salary, dp),
            per_day_salary: round(summary.per_day_salary, dp),
            base_salary: round(summary.base_salary, dp),
            overtime_amount: round(summary.overtime_amount, dp),
            net_salary: round(summary.net_salary, dp),
        }
    }

    /// Net salary formatted with its currency code, e.g. `INR 26416.33`.
    pub fn net_salary_display(&self) -> String {
        format!("{} {}", self.currency, self.net_salary)
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditTrace, MonthlyPayrollSummary};
    use chrono::{NaiveTime, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_shift(salary: &str) -> ShiftProfile {
        ShiftProfile {
            shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            duty_hours_per_day: dec("8"),
            monthly_salary: dec(salary),
        }
    }

    fn create_result(summary: MonthlyPayrollSummary) -> PayrollResult {
        PayrollResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "test".to_string(),
            employee_id: "emp_001".to_string(),
            month: "2026-07".parse().unwrap(),
            days: vec![],
            summary,
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        }
    }

    fn create_summary() -> MonthlyPayrollSummary {
        MonthlyPayrollSummary {
            days_in_month: 31,
            present_days: 27,
            absent_days: 4,
            weekly_off_days: 4,
            total_work_minutes: 11_530,
            total_overtime_minutes: 95,
            per_day_salary: dec("967.741935483870967741935"),
            per_hour_salary: dec("120.967741935483870967741"),
            base_salary: dec("26129.032258064516129032"),
            overtime_amount: dec("287.298387096774193548"),
            net_salary: dec("26416.330645161290322580"),
        }
    }

    #[test]
    fn test_slip_rounds_to_two_places() {
        let slip = SalarySlip::from_result(
            &create_result(create_summary()),
            &create_shift("30000"),
            &ExportConfig::default(),
        );

        assert_eq!(slip.per_day_salary, dec("967.74"));
        assert_eq!(slip.base_salary, dec("26129.03"));
        assert_eq!(slip.overtime_amount, dec("287.30"));
        assert_eq!(slip.net_salary, dec("26416.33"));
        assert_eq!(slip.work_hours, dec("192.17"));
        assert_eq!(slip.overtime_hours, dec("1.58"));
        assert_eq!(slip.present_days, 27);
        assert_eq!(slip.weekly_off_days, 4);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let summary = MonthlyPayrollSummary {
            net_salary: dec("100.125"),
            ..create_summary()
        };
        let slip = SalarySlip::from_result(
            &create_result(summary),
            &create_shift("30000"),
            &ExportConfig::default(),
        );
        assert_eq!(slip.net_salary, dec("100.13"));
    }

    #[test]
    fn test_zero_decimal_places() {
        let export = ExportConfig {
            currency: "USD".to_string(),
            decimal_places: 0,
        };
        let slip =
            SalarySlip::from_result(&create_result(create_summary()), &create_shift("30000"), &export);

        assert_eq!(slip.net_salary, dec("26416"));
        assert_eq!(slip.net_salary_display(), "USD 26416");
    }

    #[test]
    fn test_slip_serializes_amounts_as_strings() {
        let slip = SalarySlip::from_result(
            &create_result(create_summary()),
            &create_shift("30000"),
            &ExportConfig::default(),
        );
        let json = serde_json::to_string(&slip).unwrap();
        assert!(json.contains("\"net_salary\":\"26416.33\""));
        assert!(json.contains("\"month\":\"2026-07\""));
        assert!(json.contains("\"currency\":\"INR\""));
    }
}
