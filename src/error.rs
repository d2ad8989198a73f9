//! Error types for the Daily Wage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while rounding times, computing
//! wages, and managing the record store.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Daily Wage Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use daily_wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     input: "25:00".to_string(),
///     message: "hour must be between 0 and 23".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:00': hour must be between 0 and 23");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string was malformed or out of range.
    #[error("Invalid time '{input}': {message}")]
    InvalidTimeFormat {
        /// The raw text that failed to parse.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The derived working duration was zero or negative.
    #[error("Invalid duration: {hours} hours (out time must be after in time)")]
    InvalidDuration {
        /// The derived hours, formatted for display.
        hours: String,
    },

    /// A daily rate or PF rate was outside its permitted range.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The rate that was invalid.
        field: String,
        /// A description of what made it invalid.
        message: String,
    },

    /// A year/month pair did not name a calendar month.
    #[error("Invalid period {year}-{month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// No user exists with the given ID.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The ID that was looked up.
        user_id: Uuid,
    },

    /// A user with the same username already exists.
    #[error("Username already exists: {username}")]
    DuplicateUser {
        /// The conflicting username.
        username: String,
    },

    /// A user record was invalid or contained inconsistent data.
    #[error("Invalid user field '{field}': {message}")]
    InvalidUser {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The user has not set a daily salary rate yet.
    #[error("Daily salary rate not set for user {user_id}")]
    RateNotSet {
        /// The user without a rate.
        user_id: Uuid,
    },

    /// An entry already exists for this user on this date.
    #[error("Entry already exists for user {user_id} on {date}")]
    DuplicateEntry {
        /// The owning user.
        user_id: Uuid,
        /// The conflicting date.
        date: NaiveDate,
    },

    /// No entry exists with the given ID (or it belongs to another user).
    #[error("Entry not found: {entry_id}")]
    EntryNotFound {
        /// The ID that was looked up.
        entry_id: Uuid,
    },

    /// A total grew past the range of the decimal type.
    #[error("Amount overflow while computing {what}")]
    AmountOverflow {
        /// The total being computed.
        what: String,
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

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_displays_input_and_message() {
        let error = EngineError::InvalidTimeFormat {
            input: "9:7x".to_string(),
            message: "minute is not a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time '9:7x': minute is not a number"
        );
    }

    #[test]
    fn test_invalid_duration_displays_hours() {
        let error = EngineError::InvalidDuration {
            hours: "-2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid duration: -2 hours (out time must be after in time)"
        );
    }

    #[test]
    fn test_invalid_rate_displays_field_and_message() {
        let error = EngineError::InvalidRate {
            field: "pf_rate".to_string(),
            message: "must be between 0 and 0.5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate 'pf_rate': must be between 0 and 0.5"
        );
    }

    #[test]
    fn test_duplicate_entry_displays_user_and_date() {
        let user_id = Uuid::nil();
        let error = EngineError::DuplicateEntry {
            user_id,
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            format!("Entry already exists for user {} on 2025-03-04", user_id)
        );
    }

    #[test]
    fn test_invalid_user_displays_field_and_message() {
        let error = EngineError::InvalidUser {
            field: "username".to_string(),
            message: "cannot be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid user field 'username': cannot be empty"
        );
    }

    #[test]
    fn test_amount_overflow_displays_what() {
        let error = EngineError::AmountOverflow {
            what: "monthly_total".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Amount overflow while computing monthly_total"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rate_not_set() -> EngineResult<()> {
            Err(EngineError::RateNotSet {
                user_id: Uuid::nil(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rate_not_set()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
