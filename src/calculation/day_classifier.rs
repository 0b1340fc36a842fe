//! Day classification functionality.
//!
//! This module turns a normalised (in, out) pair into worked minutes,
//! overtime minutes and an attendance status, and wires normalisation and
//! classification together for a single attendance record.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{AttendanceRecord, AttendanceStatus, AuditWarning, ClassifiedDay, ShiftProfile};

use super::normalizer::{NormalizedPunches, normalize_record};

/// Warning code attached to days degraded by bad punch data.
pub const DATA_ERROR_WARNING: &str = "DATA_ERROR";

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The outcome of classifying one day's punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// Minutes between check-in and check-out (never negative).
    pub work_minutes: i64,
    /// Whole minutes worked beyond the contracted shift (never negative).
    pub overtime_minutes: i64,
    /// The derived status.
    pub status: AttendanceStatus,
}

/// Classifies a normalised day against the contracted shift length.
///
/// Worked minutes are counted only when both instants are known and check-out
/// is after check-in. The status boundary is exact: working exactly
/// `duty_hours_per_day × 60` minutes is [`AttendanceStatus::PresentComplete`].
/// `WeeklyOff` is never produced here.
///
/// This is a pure function of its inputs.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::{classify_day, NormalizedPunches};
/// use attendance_payroll::models::AttendanceStatus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let punches = NormalizedPunches {
///     in_instant: date.and_hms_opt(9, 0, 0),
///     out_instant: date.and_hms_opt(18, 0, 0),
/// };
///
/// let result = classify_day(&punches, Decimal::new(8, 0));
/// assert_eq!(result.work_minutes, 540);
/// assert_eq!(result.overtime_minutes, 60);
/// assert_eq!(result.status, AttendanceStatus::PresentOvertime);
/// ```
pub fn classify_day(punches: &NormalizedPunches, duty_hours_per_day: Decimal) -> DayClassification {
    let work_minutes = match (punches.in_instant, punches.out_instant) {
        (Some(check_in), Some(check_out)) if check_out > check_in => {
            (check_out - check_in).num_minutes().max(0)
        }
        _ => 0,
    };

    // Saturates: a shift longer than any representable span is never reached.
    let shift_minutes = duty_hours_per_day
        .checked_mul(MINUTES_PER_HOUR)
        .unwrap_or(if duty_hours_per_day.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        });
    let worked = Decimal::from(work_minutes);

    let status = if work_minutes == 0 {
        AttendanceStatus::Absent
    } else if worked < shift_minutes {
        AttendanceStatus::PresentIncomplete
    } else if worked == shift_minutes {
        AttendanceStatus::PresentComplete
    } else {
        AttendanceStatus::PresentOvertime
    };

    let overtime_minutes = if worked > shift_minutes {
        worked
            .checked_sub(shift_minutes)
            .and_then(|excess| excess.floor().to_i64())
            .unwrap_or(work_minutes)
    } else {
        0
    };

    DayClassification {
        work_minutes,
        overtime_minutes,
        status,
    }
}

/// Normalises and classifies one attendance record.
///
/// A status forced by an administrator bypasses both steps. Malformed punch
/// data does not fail the call: the day degrades to absent and carries a
/// [`DATA_ERROR_WARNING`] warning. The returned day is unpriced.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::classify_record;
/// use attendance_payroll::models::{AttendanceRecord, AttendanceStatus, ShiftProfile};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftProfile {
///     shift_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     shift_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     duty_hours_per_day: Decimal::new(8, 0),
///     monthly_salary: Decimal::new(30000, 0),
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 6, 3).unwrap();
///
/// let bad = AttendanceRecord::legacy("emp_001", date, Some("9h"), Some("17:00"));
/// let day = classify_record(&bad, &shift);
/// assert_eq!(day.status, AttendanceStatus::Absent);
/// assert!(day.is_degraded());
/// ```
pub fn classify_record(record: &AttendanceRecord, shift: &ShiftProfile) -> ClassifiedDay {
    if let Some(forced) = record.status_override {
        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            status = AttendanceStatus::from(forced).as_str(),
            "Using administrator-forced status"
        );
        return ClassifiedDay {
            status: forced.into(),
            ..ClassifiedDay::absent(record.date, record.revision)
        };
    }

    let punches = match normalize_record(record, Some(shift.shift_end)) {
        Ok(punches) => punches,
        Err(err) => {
            warn!(
                employee_id = %record.employee_id,
                date = %record.date,
                error = %err,
                "Degrading day to absent after attendance data error"
            );
            let mut day = ClassifiedDay::absent(record.date, record.revision);
            day.warnings.push(AuditWarning {
                code: DATA_ERROR_WARNING.to_string(),
                message: err.to_string(),
                severity: "medium".to_string(),
            });
            return day;
        }
    };

    let classification = classify_day(&punches, shift.duty_hours_per_day);
    debug!(
        employee_id = %record.employee_id,
        date = %record.date,
        work_minutes = classification.work_minutes,
        overtime_minutes = classification.overtime_minutes,
        status = classification.status.as_str(),
        "Classified attendance day"
    );

    ClassifiedDay {
        in_instant: punches.in_instant,
        out_instant: punches.out_instant,
        work_minutes: classification.work_minutes,
        overtime_minutes: classification.overtime_minutes,
        status: classification.status,
        ..ClassifiedDay::absent(record.date, record.revision)
    }
}
