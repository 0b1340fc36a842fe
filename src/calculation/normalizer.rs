//! Attendance record normalisation.
//!
//! This module reconciles the two punch representations an
//! [`AttendanceRecord`] can carry into one canonical (in, out) instant pair.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::time_format::{parse_time_of_day, parse_timestamp, timestamp_offset};
use crate::models::{AttendanceRecord, present};

/// The resolved check-in/check-out instants of one day.
///
/// Either side may be missing; a day with no check-in resolves to absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedPunches {
    /// The check-in instant, if known.
    pub in_instant: Option<NaiveDateTime>,
    /// The check-out instant, if known.
    pub out_instant: Option<NaiveDateTime>,
}

impl NormalizedPunches {
    /// A pair with neither instant known.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Resolves an attendance record into a canonical (in, out) instant pair.
///
/// Rules, in priority order:
/// 1. Both canonical timestamps present: used as-is.
/// 2. Legacy `first_in` present: combined with the record date. A `last_out`
///    earlier than `first_in` rolls over to the next day. Without a
///    `last_out`, a known `shift_end` on the day after check-in stands in for
///    the missing check-out.
/// 3. Otherwise neither instant is known.
///
/// # Errors
///
/// Returns [`EngineError::DataError`] if a punch string cannot be parsed, or
/// if canonical timestamps put check-out before check-in.
///
/// # Examples
///
/// ```
/// use attendance_payroll::calculation::normalize_record;
/// use attendance_payroll::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let record = AttendanceRecord::legacy("emp_001", date, Some("22:00"), Some("06:00"));
///
/// let punches = normalize_record(&record, None).unwrap();
/// assert_eq!(punches.in_instant, date.and_hms_opt(22, 0, 0));
/// assert_eq!(punches.out_instant, date.succ_opt().unwrap().and_hms_opt(6, 0, 0));
/// ```
pub fn normalize_record(
    record: &AttendanceRecord,
    shift_end: Option<NaiveTime>,
) -> EngineResult<NormalizedPunches> {
    if record.has_canonical_punches() {
        return normalize_canonical(record);
    }

    if !present(&record.first_in) {
        return Ok(NormalizedPunches::none());
    }

    let first_in = parse_time_field(record.date, "first_in", record.first_in.as_deref())?;
    let in_instant = record.date.and_time(first_in);

    let out_instant = if present(&record.last_out) {
        let last_out = parse_time_field(record.date, "last_out", record.last_out.as_deref())?;
        let candidate = record.date.and_time(last_out);
        if candidate < in_instant {
            Some(next_day(record.date)?.and_time(last_out))
        } else {
            Some(candidate)
        }
    } else {
        match shift_end {
            Some(end) => Some(next_day(record.date)?.and_time(end)),
            None => None,
        }
    };

    Ok(NormalizedPunches {
        in_instant: Some(in_instant),
        out_instant,
    })
}

fn normalize_canonical(record: &AttendanceRecord) -> EngineResult<NormalizedPunches> {
    let in_instant = parse_timestamp_field(record.date, "in_datetime", record.in_datetime.as_deref())?;
    let out_instant =
        parse_timestamp_field(record.date, "out_datetime", record.out_datetime.as_deref())?;

    // Offsets are dropped, so both sides must share one to be comparable.
    let in_offset = timestamp_offset(record.in_datetime.as_deref().unwrap_or_default());
    let out_offset = timestamp_offset(record.out_datetime.as_deref().unwrap_or_default());
    if in_offset != out_offset {
        return Err(EngineError::DataError {
            date: record.date,
            message: "in_datetime and out_datetime carry different UTC offsets".to_string(),
        });
    }

    if out_instant < in_instant {
        return Err(EngineError::DataError {
            date: record.date,
            message: format!(
                "out_datetime {} is before in_datetime {}",
                out_instant, in_instant
            ),
        });
    }

    Ok(NormalizedPunches {
        in_instant: Some(in_instant),
        out_instant: Some(out_instant),
    })
}

fn parse_time_field(date: NaiveDate, field: &str, value: Option<&str>) -> EngineResult<NaiveTime> {
    let raw = value.unwrap_or_default();
    parse_time_of_day(raw).ok_or_else(|| EngineError::DataError {
        date,
        message: format!("unparseable {} '{}', expected HH:MM", field, raw),
    })
}

fn parse_timestamp_field(
    date: NaiveDate,
    field: &str,
    value: Option<&str>,
) -> EngineResult<NaiveDateTime> {
    let raw = value.unwrap_or_default();
    parse_timestamp(raw).ok_or_else(|| EngineError::DataError {
        date,
        message: format!("unparseable {} '{}', expected YYYY-MM-DDTHH:MM:SS", field, raw),
    })
}

fn next_day(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| EngineError::DataError {
            date,
            message: "date out of range".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn at(day: u32, h: u32, m: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // ==========================================================================
    // NR-001: canonical timestamps take precedence over legacy fields
    // ==========================================================================
    #[test]
    fn test_nr_001_canonical_wins_over_legacy() {
        let mut both = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T08:30:00",
            "2026-01-15T18:00:00",
        );
        both.first_in = Some("10:00".to_string());
        both.last_out = Some("12:00".to_string());

        let canonical_only = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T08:30:00",
            "2026-01-15T18:00:00",
        );

        let result = normalize_record(&both, Some(time(17, 0))).unwrap();
        assert_eq!(
            result,
            normalize_record(&canonical_only, Some(time(17, 0))).unwrap()
        );
        assert_eq!(result.in_instant, at(15, 8, 30));
        assert_eq!(result.out_instant, at(15, 18, 0));
    }

    // ==========================================================================
    // NR-002: legacy punches crossing midnight roll over to the next day
    // ==========================================================================
    #[test]
    fn test_nr_002_midnight_rollover() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("22:00"), Some("06:00"));
        let result = normalize_record(&record, None).unwrap();

        assert_eq!(result.in_instant, at(15, 22, 0));
        assert_eq!(result.out_instant, at(16, 6, 0));
    }

    #[test]
    fn test_nr_003_same_day_legacy_punches() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("09:00"), Some("17:30"));
        let result = normalize_record(&record, Some(time(17, 0))).unwrap();

        assert_eq!(result.in_instant, at(15, 9, 0));
        assert_eq!(result.out_instant, at(15, 17, 30));
    }

    #[test]
    fn test_nr_004_equal_legacy_punches_do_not_roll_over() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("09:00"), Some("09:00"));
        let result = normalize_record(&record, None).unwrap();
        assert_eq!(result.out_instant, at(15, 9, 0));
    }

    // ==========================================================================
    // NR-005: missing check-out is synthesised at shift end on the next day
    // ==========================================================================
    #[test]
    fn test_nr_005_missing_last_out_uses_next_day_shift_end() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("20:00"), None);
        let result = normalize_record(&record, Some(time(4, 0))).unwrap();

        assert_eq!(result.in_instant, at(15, 20, 0));
        assert_eq!(result.out_instant, at(16, 4, 0));
    }

    #[test]
    fn test_nr_006_missing_last_out_without_shift_end() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("09:00"), None);
        let result = normalize_record(&record, None).unwrap();

        assert_eq!(result.in_instant, at(15, 9, 0));
        assert_eq!(result.out_instant, None);
    }

    #[test]
    fn test_nr_007_blank_last_out_treated_as_missing() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("20:00"), Some(""));
        let result = normalize_record(&record, Some(time(4, 0))).unwrap();
        assert_eq!(result.out_instant, at(16, 4, 0));
    }

    // ==========================================================================
    // NR-008: no punch data at all
    // ==========================================================================
    #[test]
    fn test_nr_008_no_punches() {
        let record = AttendanceRecord::empty("emp_001", date());
        assert_eq!(
            normalize_record(&record, Some(time(17, 0))).unwrap(),
            NormalizedPunches::none()
        );
    }

    #[test]
    fn test_nr_009_single_canonical_timestamp_falls_back_to_legacy() {
        let mut record = AttendanceRecord::legacy("emp_001", date(), Some("09:00"), Some("13:00"));
        record.in_datetime = Some("2026-01-15T07:00:00".to_string());

        let result = normalize_record(&record, None).unwrap();
        assert_eq!(result.in_instant, at(15, 9, 0));
        assert_eq!(result.out_instant, at(15, 13, 0));
    }

    #[test]
    fn test_nr_010_single_canonical_timestamp_without_legacy_is_empty() {
        let mut record = AttendanceRecord::empty("emp_001", date());
        record.out_datetime = Some("2026-01-15T17:00:00".to_string());

        assert_eq!(
            normalize_record(&record, None).unwrap(),
            NormalizedPunches::none()
        );
    }

    // ==========================================================================
    // NR-011: malformed data is a DataError
    // ==========================================================================
    #[test]
    fn test_nr_011_malformed_first_in() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("25:99"), Some("17:00"));
        let err = normalize_record(&record, None).unwrap_err();
        match err {
            EngineError::DataError { date: d, message } => {
                assert_eq!(d, date());
                assert!(message.contains("first_in"));
                assert!(message.contains("25:99"));
            }
            other => panic!("expected DataError, got {:?}", other),
        }
    }

    #[test]
    fn test_nr_012_malformed_last_out() {
        let record = AttendanceRecord::legacy("emp_001", date(), Some("09:00"), Some("--:--"));
        assert!(matches!(
            normalize_record(&record, None),
            Err(EngineError::DataError { message, .. }) if message.contains("last_out")
        ));
    }

    #[test]
    fn test_nr_013_malformed_canonical_timestamp() {
        let record =
            AttendanceRecord::canonical("emp_001", date(), "2026-01-15T09:00:00", "tomorrow");
        assert!(matches!(
            normalize_record(&record, None),
            Err(EngineError::DataError { message, .. }) if message.contains("out_datetime")
        ));
    }

    #[test]
    fn test_nr_014_canonical_out_before_in_is_data_error() {
        let record = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T17:00:00",
            "2026-01-15T09:00:00",
        );
        assert!(matches!(
            normalize_record(&record, None),
            Err(EngineError::DataError { message, .. }) if message.contains("before")
        ));
    }

    #[test]
    fn test_nr_015_canonical_overnight_used_directly() {
        let record = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T22:00:00",
            "2026-01-16T07:00:00",
        );
        let result = normalize_record(&record, None).unwrap();
        assert_eq!(result.in_instant, at(15, 22, 0));
        assert_eq!(result.out_instant, at(16, 7, 0));
    }

    #[test]
    fn test_nr_016_month_end_rollover() {
        let last_day = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let record = AttendanceRecord::legacy("emp_001", last_day, Some("23:00"), Some("07:00"));
        let result = normalize_record(&record, None).unwrap();
        assert_eq!(
            result.out_instant,
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().and_hms_opt(7, 0, 0)
        );
    }

    #[test]
    fn test_nr_017_mixed_offsets_are_data_error() {
        let record = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T09:00:00+05:30",
            "2026-01-15T17:00:00Z",
        );
        assert!(matches!(
            normalize_record(&record, None),
            Err(EngineError::DataError { message, .. }) if message.contains("offsets")
        ));

        let naive_and_offset = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T09:00:00",
            "2026-01-15T17:00:00+05:30",
        );
        assert!(normalize_record(&naive_and_offset, None).is_err());
    }

    #[test]
    fn test_nr_018_matching_offsets_keep_wall_time() {
        let record = AttendanceRecord::canonical(
            "emp_001",
            date(),
            "2026-01-15T09:00:00+05:30",
            "2026-01-15T17:00:00+05:30",
        );
        let result = normalize_record(&record, None).unwrap();
        assert_eq!(result.in_instant, at(15, 9, 0));
        assert_eq!(result.out_instant, at(15, 17, 0));
    }
}
