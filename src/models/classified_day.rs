//! Classified day model.
//!
//! A [`ClassifiedDay`] is the derived, immutable view of one attendance
//! record: its resolved punches, worked/overtime minutes, status, and (once
//! priced by the aggregator) the pay it earns.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceStatus, AuditWarning};

/// One day of attendance after normalisation and classification.
///
/// `day_salary` and `ot_amount` are zero until the day has been priced by
/// the payroll aggregator.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::{AttendanceStatus, ClassifiedDay};
/// use chrono::NaiveDate;
///
/// let day = ClassifiedDay::absent(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), 0);
/// assert_eq!(day.status, AttendanceStatus::Absent);
/// assert_eq!(day.work_minutes, 0);
/// assert!(!day.is_degraded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// The attendance status of the day.
    pub status: AttendanceStatus,
    /// Resolved check-in instant, if any.
    pub in_instant: Option<NaiveDateTime>,
    /// Resolved check-out instant, if any.
    pub out_instant: Option<NaiveDateTime>,
    /// Minutes worked (never negative).
    pub work_minutes: i64,
    /// Minutes worked beyond the contracted shift (never negative).
    pub overtime_minutes: i64,
    /// The portion of the monthly salary earned on this day.
    pub day_salary: Decimal,
    /// Overtime pay earned on this day.
    pub ot_amount: Decimal,
    /// Revision of the attendance record this day was derived from.
    pub record_revision: u32,
    /// Data problems found while deriving this day.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}

impl ClassifiedDay {
    /// Creates an unpriced absent day with no punches.
    pub fn absent(date: NaiveDate, record_revision: u32) -> Self {
        Self {
            date,
            status: AttendanceStatus::Absent,
            in_instant: None,
            out_instant: None,
            work_minutes: 0,
            overtime_minutes: 0,
            day_salary: Decimal::ZERO,
            ot_amount: Decimal::ZERO,
            record_revision,
            warnings: vec![],
        }
    }

    /// Returns true if the day was degraded because of bad input data.
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total pay for the day (`day_salary + ot_amount`), saturating at
    /// [`Decimal::MAX`].
    pub fn total_pay(&self) -> Decimal {
        self.day_salary.saturating_add(self.ot_amount)
    }
}
