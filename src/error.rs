//! Error types for the severance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the vacation and settlement calculations can report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the severance engine.
///
/// Every error is recoverable: callers receive it as a value and can turn it
/// into a user-facing message.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The employee has no start date on record.
    #[error("No start date on record for employee")]
    MissingStartDate,

    /// The termination date falls before the start date.
    #[error("Invalid date range: termination {end} is before start {start}")]
    InvalidDateRange {
        /// The employee's start date.
        start: NaiveDate,
        /// The termination date that precedes it.
        end: NaiveDate,
    },

    /// A numeric input was negative.
    #[error("Invalid numeric input '{field}': {value} must not be negative")]
    InvalidNumericInput {
        /// The name of the offending field.
        field: String,
        /// The value that was supplied.
        value: Decimal,
    },

    /// An employee identity field was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
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

    /// A policy table was structurally invalid (gaps, overlaps, no open tier).
    #[error("Invalid policy: {message}")]
    InvalidPolicy {
        /// A description of the problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_missing_start_date_message() {
        assert_eq!(
            EngineError::MissingStartDate.to_string(),
            "No start date on record for employee"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: termination 2024-04-30 is before start 2024-05-01"
        );
    }

    #[test]
    fn test_invalid_numeric_input_displays_field_and_value() {
        let error = EngineError::InvalidNumericInput {
            field: "bonuses".to_string(),
            value: Decimal::from_str("-10.50").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid numeric input 'bonuses': -10.50 must not be negative"
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
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "national_id".to_string(),
            message: "must not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'national_id': must not be blank"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_start() -> EngineResult<()> {
            Err(EngineError::MissingStartDate)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_start()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(EngineError::MissingStartDate));
    }
}
