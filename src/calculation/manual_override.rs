//! Manual attendance overrides.
//!
//! An administrator can correct a day's attendance. The correction never
//! mutates the stored record: it yields a new record with a bumped revision,
//! which is then run through the normal normalise/classify pipeline.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::time_format::parse_time_of_day;
use crate::models::{
    AttendanceRecord, AttendanceStatus, ClassifiedDay, ForcedStatus, RecordSource, ShiftProfile,
    present,
};

use super::day_classifier::classify_record;

/// An administrator's correction to one day of attendance.
///
/// For present statuses the requested label is advisory: the final status
/// is re-derived from the corrected times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceOverride {
    /// The status the administrator selected.
    pub status: AttendanceStatus,
    /// Corrected check-in time of day (`HH:MM`).
    #[serde(default)]
    pub first_in: Option<String>,
    /// Corrected check-out time of day (`HH:MM`).
    #[serde(default)]
    pub last_out: Option<String>,
}

impl AttendanceOverride {
    /// Creates an override that forces a non-working status.
    pub fn forced(status: ForcedStatus) -> Self {
        Self {
            status: status.into(),
            first_in: None,
            last_out: None,
        }
    }

    /// Creates an override with corrected punch times.
    pub fn with_times(status: AttendanceStatus, first_in: &str, last_out: Option<&str>) -> Self {
        Self {
            status,
            first_in: Some(first_in.to_string()),
            last_out: last_out.map(str::to_string),
        }
    }
}

/// Applies an override to a record, returning the corrected record.
///
/// - `WEEKLY_OFF` and `ABSENT` force the status and clear every punch field.
/// - Present statuses need a `first_in`; both times must parse. Canonical
///   timestamps are cleared so the corrected times are authoritative.
///
/// The returned record has `source = manual` and `revision + 1`.
///
/// # Errors
///
/// - [`EngineError::InvalidOverride`] if a present status has no check-in,
///   or the record's revision cannot be bumped.
/// - [`EngineError::DataError`] if a supplied time does not parse.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::{AttendanceOverride, apply_override};
/// use attendance_payroll::models::{AttendanceRecord, ForcedStatus, RecordSource};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 6, 7).unwrap();
/// let record = AttendanceRecord::legacy("emp_001", date, Some("09:00"), None);
///
/// let corrected = apply_override(&record, &AttendanceOverride::forced(ForcedStatus::WeeklyOff)).unwrap();
/// assert_eq!(corrected.status_override, Some(ForcedStatus::WeeklyOff));
/// assert_eq!(corrected.first_in, None);
/// assert_eq!(corrected.source, RecordSource::Manual);
/// assert_eq!(corrected.revision, 1);
/// ```
pub fn apply_override(
    record: &AttendanceRecord,
    correction: &AttendanceOverride,
) -> EngineResult<AttendanceRecord> {
    let revision = record
        .revision
        .checked_add(1)
        .ok_or_else(|| EngineError::InvalidOverride {
            message: format!("record on {} has reached the maximum revision", record.date),
        })?;

    let base = AttendanceRecord {
        first_in: None,
        last_out: None,
        in_datetime: None,
        out_datetime: None,
        status_override: None,
        source: RecordSource::Manual,
        revision,
        ..record.clone()
    };

    let corrected = match correction.status {
        AttendanceStatus::WeeklyOff => AttendanceRecord {
            status_override: Some(ForcedStatus::WeeklyOff),
            ..base
        },
        AttendanceStatus::Absent => AttendanceRecord {
            status_override: Some(ForcedStatus::Absent),
            ..base
        },
        AttendanceStatus::PresentIncomplete
        | AttendanceStatus::PresentComplete
        | AttendanceStatus::PresentOvertime => {
            if !present(&correction.first_in) {
                return Err(EngineError::InvalidOverride {
                    message: format!(
                        "{} on {} requires a check-in time",
                        correction.status.as_str(),
                        record.date
                    ),
                });
            }
            let first_in = validated_time(record, "first_in", &correction.first_in)?;
            let last_out = validated_time(record, "last_out", &correction.last_out)?;
            AttendanceRecord {
                first_in,
                last_out,
                ..base
            }
        }
    };

    info!(
        employee_id = %corrected.employee_id,
        date = %corrected.date,
        requested_status = correction.status.as_str(),
        revision = corrected.revision,
        "Applied manual attendance override"
    );

    Ok(corrected)
}

/// Applies an override and classifies the corrected record.
///
/// # Errors
///
/// Returns [`EngineError::ConfigError`] for an invalid shift profile, and
/// the errors of [`apply_override`].
pub fn reclassify_with_override(
    record: &AttendanceRecord,
    correction: &AttendanceOverride,
    shift: &ShiftProfile,
) -> EngineResult<(AttendanceRecord, ClassifiedDay)> {
    shift.validate()?;
    let corrected = apply_override(record, correction)?;
    let day = classify_record(&corrected, shift);
    Ok((corrected, day))
}

fn validated_time(
    record: &AttendanceRecord,
    field: &str,
    value: &Option<String>,
) -> EngineResult<Option<String>> {
    if !present(value) {
        return Ok(None);
    }
    let raw = value.as_deref().unwrap_or_default().trim();
    match parse_time_of_day(raw) {
        Some(_) => Ok(Some(raw.to_string())),
        None => Err(EngineError::DataError {
            date: record.date,
            message: format!("{field} '{raw}' is not a valid HH:MM time"),
        }),
    }
}
