//! Attendance record model and related types.
//!
//! This module defines the raw [`AttendanceRecord`] as it arrives from the
//! ingestion side (biometric import or manual edit), plus the status labels
//! a classified day can carry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status of one calendar day.
///
/// `WeeklyOff` is never derived from punches; it is only ever assigned by an
/// administrator override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// No usable work time.
    Absent,
    /// Worked less than the contracted shift.
    PresentIncomplete,
    /// Worked exactly the contracted shift.
    PresentComplete,
    /// Worked more than the contracted shift.
    PresentOvertime,
    /// Paid non-working day.
    WeeklyOff,
}

impl AttendanceStatus {
    /// Returns true if the day counts as present for pay purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_payroll::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::WeeklyOff.is_present());
    /// assert!(AttendanceStatus::PresentIncomplete.is_present());
    /// assert!(!AttendanceStatus::Absent.is_present());
    /// ```
    pub fn is_present(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }

    /// Returns true if the day earns the full per-day salary.
    pub fn earns_full_day(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::PresentComplete
                | AttendanceStatus::PresentOvertime
                | AttendanceStatus::WeeklyOff
        )
    }

    /// The wire label of the status (e.g. `PRESENT_COMPLETE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::PresentIncomplete => "PRESENT_INCOMPLETE",
            AttendanceStatus::PresentComplete => "PRESENT_COMPLETE",
            AttendanceStatus::PresentOvertime => "PRESENT_OVERTIME",
            AttendanceStatus::WeeklyOff => "WEEKLY_OFF",
        }
    }
}

/// A status an administrator can force onto a day, bypassing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForcedStatus {
    /// Paid non-working day.
    WeeklyOff,
    /// Unpaid absence regardless of any punches.
    Absent,
}

impl From<ForcedStatus> for AttendanceStatus {
    fn from(forced: ForcedStatus) -> Self {
        match forced {
            ForcedStatus::WeeklyOff => AttendanceStatus::WeeklyOff,
            ForcedStatus::Absent => AttendanceStatus::Absent,
        }
    }
}

/// Where an attendance record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Imported from the biometric device feed.
    #[default]
    Biometric,
    /// Entered or corrected by an administrator.
    Manual,
}

/// A raw attendance record for one employee on one calendar day.
///
/// Two punch representations exist side by side. The canonical absolute
/// timestamps (`in_datetime`/`out_datetime`) win whenever both are present;
/// otherwise the legacy time-of-day pair (`first_in`/`last_out`) is combined
/// with `date`. Punch fields are kept as raw strings so that malformed values
/// surface as data errors on the affected day only.
///
/// Records are never mutated by the engine. A manual override produces a new
/// record with a higher `revision`.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::legacy(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     Some("22:00"),
///     Some("06:00"),
/// );
/// assert!(!record.has_canonical_punches());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar day the record tracks.
    pub date: NaiveDate,
    /// Legacy check-in time of day (`HH:MM`).
    #[serde(default)]
    pub first_in: Option<String>,
    /// Legacy check-out time of day (`HH:MM`).
    #[serde(default)]
    pub last_out: Option<String>,
    /// Canonical check-in timestamp (`YYYY-MM-DDTHH:MM:SS`). An RFC 3339
    /// offset is accepted but dropped; both timestamps must carry the same one.
    #[serde(default)]
    pub in_datetime: Option<String>,
    /// Canonical check-out timestamp (`YYYY-MM-DDTHH:MM:SS`).
    #[serde(default)]
    pub out_datetime: Option<String>,
    /// Status forced by an administrator, bypassing classification.
    #[serde(default)]
    pub status_override: Option<ForcedStatus>,
    /// Where the record came from.
    #[serde(default)]
    pub source: RecordSource,
    /// Version counter, bumped by every manual override.
    #[serde(default)]
    pub revision: u32,
}

impl AttendanceRecord {
    /// Creates an empty biometric record (no punches) for a day.
    pub fn empty(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            first_in: None,
            last_out: None,
            in_datetime: None,
            out_datetime: None,
            status_override: None,
            source: RecordSource::Biometric,
            revision: 0,
        }
    }

    /// Creates a record in the legacy time-of-day shape.
    pub fn legacy(
        employee_id: impl Into<String>,
        date: NaiveDate,
        first_in: Option<&str>,
        last_out: Option<&str>,
    ) -> Self {
        Self {
            first_in: first_in.map(str::to_string),
            last_out: last_out.map(str::to_string),
            ..Self::empty(employee_id, date)
        }
    }

    /// Creates a record in the canonical timestamp shape.
    pub fn canonical(
        employee_id: impl Into<String>,
        date: NaiveDate,
        in_datetime: &str,
        out_datetime: &str,
    ) -> Self {
        Self {
            in_datetime: Some(in_datetime.to_string()),
            out_datetime: Some(out_datetime.to_string()),
            ..Self::empty(employee_id, date)
        }
    }

    /// Returns true if both canonical timestamps are present.
    pub fn has_canonical_punches(&self) -> bool {
        present(&self.in_datetime) && present(&self.out_datetime)
    }

    /// Returns true if the legacy check-in time is present.
    pub fn has_legacy_check_in(&self) -> bool {
        present(&self.first_in)
    }
}

/// Treats blank strings the same as missing fields.
pub(crate) fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
