//! Calculation logic for the attendance payroll engine.
//!
//! The pipeline runs record normalisation, day classification, pay rate
//! derivation, per-day pricing and month aggregation. It also covers
//! manual overrides and organisation-wide runs.

mod aggregator;
mod audit;
mod day_classifier;
mod day_pay;
mod manual_override;
mod normalizer;
mod organisation;
mod pay_rates;
mod payroll;

pub use aggregator::{aggregate_month, summarize_month};
pub use audit::{
    DAY_CLASSIFICATION_RULE, MONTH_TOTALS_RULE, PAY_RATES_RULE, day_step, month_totals_step,
    pay_rates_step,
};
pub use day_classifier::{DATA_ERROR_WARNING, DayClassification, classify_day, classify_record};
pub use day_pay::{calculate_day_salary, calculate_ot_amount, price_day};
pub use manual_override::{AttendanceOverride, apply_override, reclassify_with_override};
pub use normalizer::{NormalizedPunches, normalize_record};
pub use organisation::{
    EmployeePayrollOutcome, OrganisationPayroll, OrganisationTotals, run_organisation_payroll,
};
pub use pay_rates::{PayRates, derive_pay_rates};
pub use payroll::{ENGINE_VERSION, calculate_payroll};
