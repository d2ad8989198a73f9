//! Wall-clock time types.
//!
//! This module defines [`TimeOfDay`], a plain hour:minute pair parsed from
//! `"HH:MM"` text, and [`RoundedTime`], the same pair quantized to the half
//! hour. Neither carries a date or a timezone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use daily_wage_engine::models::TimeOfDay;
///
/// let time: TimeOfDay = "09:50".parse().unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.minute(), 50);
/// assert_eq!(time.total_minutes(), 590);
/// assert_eq!(time.to_string(), "09:50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, validating both components.
    pub fn new(hour: u8, minute: u8) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::InvalidTimeFormat {
                input: format!("{}:{:02}", hour, minute),
                message: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(EngineError::InvalidTimeFormat {
                input: format!("{:02}:{}", hour, minute),
                message: "minute must be between 0 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes since midnight.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

/// Parses one numeric component of an `"HH:MM"` string.
fn parse_component(input: &str, part: &str, name: &str) -> EngineResult<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidTimeFormat {
            input: input.to_string(),
            message: format!("{} must be one or two digits", name),
        });
    }
    part.parse::<u8>()
        .map_err(|e| EngineError::InvalidTimeFormat {
            input: input.to_string(),
            message: format!("{} is not a number: {}", name, e),
        })
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour_part, minute_part) =
            trimmed
                .split_once(':')
                .ok_or_else(|| EngineError::InvalidTimeFormat {
                    input: s.to_string(),
                    message: "expected HH:MM".to_string(),
                })?;

        let hour = parse_component(s, hour_part, "hour")?;
        let minute = parse_component(s, minute_part, "minute")?;

        Self::new(hour, minute).map_err(|e| match e {
            EngineError::InvalidTimeFormat { message, .. } => EngineError::InvalidTimeFormat {
                input: s.to_string(),
                message,
            },
            other => other,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A time of day whose minute is always `0` or `30`.
///
/// The only ways to obtain one are [`RoundedTime::new`], which rejects any
/// other minute, and the company rounding rule in
/// [`round_time`](crate::calculation::round_time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoundedTime(TimeOfDay);

impl RoundedTime {
    /// Creates a rounded time, rejecting minutes other than `0` and `30`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_wage_engine::models::RoundedTime;
    ///
    /// assert!(RoundedTime::new(18, 30).is_ok());
    /// assert!(RoundedTime::new(18, 15).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> EngineResult<Self> {
        let time = TimeOfDay::new(hour, minute)?;
        if minute != 0 && minute != 30 {
            return Err(EngineError::InvalidTimeFormat {
                input: time.to_string(),
                message: "rounded minute must be 00 or 30".to_string(),
            });
        }
        Ok(Self(time))
    }

    /// Builds a rounded time from an hour (taken modulo 24) and a half-hour flag.
    pub(crate) fn from_half_hours(hour: u8, half_past: bool) -> Self {
        Self(TimeOfDay {
            hour: hour % 24,
            minute: if half_past { 30 } else { 0 },
        })
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    /// Returns the minute component (0 or 30).
    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// Returns the number of minutes since midnight.
    pub fn total_minutes(&self) -> i64 {
        self.0.total_minutes()
    }

    /// Returns the underlying time of day.
    pub fn as_time_of_day(&self) -> TimeOfDay {
        self.0
    }
}

impl fmt::Display for RoundedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RoundedTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time: TimeOfDay = s.parse()?;
        Self::new(time.hour(), time.minute())
    }
}

impl TryFrom<String> for RoundedTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoundedTime> for String {
    fn from(value: RoundedTime) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_padded_time() {
        let time: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        let time: TimeOfDay = "7:45".parse().unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.to_string(), "07:45");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let time: TimeOfDay = " 18:10 ".parse().unwrap();
        assert_eq!(time.total_minutes(), 18 * 60 + 10);
    }

    #[test]
    fn test_parse_rejects_hour_out_of_range() {
        let result = "24:00".parse::<TimeOfDay>();
        match result {
            Err(EngineError::InvalidTimeFormat { input, message }) => {
                assert_eq!(input, "24:00");
                assert!(message.contains("hour"));
            }
            other => panic!("Expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_minute_out_of_range() {
        let result = "10:60".parse::<TimeOfDay>();
        match result {
            Err(EngineError::InvalidTimeFormat { input, message }) => {
                assert_eq!(input, "10:60");
                assert!(message.contains("minute"));
            }
            other => panic!("Expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for bad in ["", "0930", "ab:cd", "9:", ":30", "12:3a", "-1:30", "123:00", "9:30:00"] {
            assert!(
                matches!(
                    bad.parse::<TimeOfDay>(),
                    Err(EngineError::InvalidTimeFormat { .. })
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rounded_time_rejects_quarter_hours() {
        assert!(RoundedTime::new(10, 15).is_err());
        assert!(RoundedTime::new(10, 45).is_err());
        assert!(RoundedTime::new(10, 0).is_ok());
        assert!(RoundedTime::new(10, 30).is_ok());
    }

    #[test]
    fn test_serializes_as_hh_mm_string() {
        let time = TimeOfDay::new(6, 5).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"06:05\"");

        let rounded = RoundedTime::new(23, 30).unwrap();
        assert_eq!(serde_json::to_string(&rounded).unwrap(), "\"23:30\"");
    }

    #[test]
    fn test_deserialize_rejects_invalid_rounded_time() {
        let result: Result<RoundedTime, _> = serde_json::from_str("\"08:10\"");
        assert!(result.is_err());

        let ok: RoundedTime = serde_json::from_str("\"08:30\"").unwrap();
        assert_eq!(ok.total_minutes(), 510);
    }

    #[test]
    fn test_ordering_follows_minutes_since_midnight() {
        let early: TimeOfDay = "08:59".parse().unwrap();
        let late: TimeOfDay = "09:00".parse().unwrap();
        assert!(early < late);
    }
}
