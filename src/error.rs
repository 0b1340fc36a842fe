//! Error types for the attendance payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while turning attendance into pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance payroll engine.
///
/// Data errors are usually recovered inside the pipeline (the affected day
/// degrades to absent); configuration and input-mismatch errors abort the
/// whole employee-month computation.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::EngineError;
///
/// let error = EngineError::ConfigError {
///     field: "duty_hours_per_day".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid shift configuration 'duty_hours_per_day': must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An attendance record contained malformed or contradictory punch data.
    #[error("Invalid attendance data on {date}: {message}")]
    DataError {
        /// The calendar day of the offending record.
        date: NaiveDate,
        /// A description of what was wrong with the data.
        message: String,
    },

    /// A shift profile or engine parameter was invalid.
    #[error("Invalid shift configuration '{field}': {message}")]
    ConfigError {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A record did not belong to the requested employee or month.
    #[error("Record for employee '{employee_id}' on {date} does not match the request: {message}")]
    InputMismatch {
        /// The employee id carried by the record.
        employee_id: String,
        /// The date carried by the record.
        date: NaiveDate,
        /// A description of the mismatch.
        message: String,
    },

    /// A payroll month string could not be parsed.
    #[error("Invalid payroll month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The value that failed to parse.
        value: String,
    },

    /// A manual override request was incomplete or contradictory.
    #[error("Invalid attendance override: {message}")]
    InvalidOverride {
        /// A description of what was wrong with the override.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors the pipeline recovers from by degrading a day.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::DataError { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_data_error_displays_date_and_message() {
        let error = EngineError::DataError {
            date: date(),
            message: "unparseable first_in '25:99'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance data on 2026-01-15: unparseable first_in '25:99'"
        );
    }

    #[test]
    fn test_config_error_displays_field_and_message() {
        let error = EngineError::ConfigError {
            field: "monthly_salary".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift configuration 'monthly_salary': cannot be negative"
        );
    }

    #[test]
    fn test_input_mismatch_displays_employee_and_date() {
        let error = EngineError::InputMismatch {
            employee_id: "emp_002".to_string(),
            date: date(),
            message: "expected employee 'emp_001'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Record for employee 'emp_002' on 2026-01-15 does not match the request: expected employee 'emp_001'"
        );
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "2026-13".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll month '2026-13': expected YYYY-MM"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_only_data_errors_are_recoverable() {
        assert!(
            EngineError::DataError {
                date: date(),
                message: "x".to_string()
            }
            .is_recoverable()
        );
        assert!(
            !EngineError::ConfigError {
                field: "duty_hours_per_day".to_string(),
                message: "x".to_string()
            }
            .is_recoverable()
        );
        assert!(
            !EngineError::InvalidOverride {
                message: "x".to_string()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_error() -> EngineResult<()> {
            Err(EngineError::ConfigError {
                field: "duty_hours_per_day".to_string(),
                message: "must be greater than zero".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
