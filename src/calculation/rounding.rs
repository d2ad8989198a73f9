//! Time rounding functionality.
//!
//! This module applies the company rounding rule that quantizes every
//! in-time and out-time to the half hour before hours are derived.

use crate::models::{RoundedTime, TimeOfDay};

/// Minutes at or below this value round down to the current hour.
pub const ROUND_DOWN_MAX_MINUTE: u8 = 15;

/// Minutes above this value round up to the next hour.
pub const ROUND_UP_MIN_EXCLUSIVE: u8 = 45;

/// Rounds a time of day to the half hour using the company rule.
///
/// - minute > 45 rounds up to the next whole hour
/// - minute <= 15 rounds down to the current hour
/// - 16..=45 rounds to half past the current hour
///
/// An hour that reaches 24 wraps to 0. No day carry is tracked, so
/// `23:50` becomes `00:00` of the same day.
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::round_time;
///
/// assert_eq!(round_time("09:50".parse().unwrap()).to_string(), "10:00");
/// assert_eq!(round_time("18:10".parse().unwrap()).to_string(), "18:00");
/// assert_eq!(round_time("12:16".parse().unwrap()).to_string(), "12:30");
/// assert_eq!(round_time("23:50".parse().unwrap()).to_string(), "00:00");
/// ```
pub fn round_time(time: TimeOfDay) -> RoundedTime {
    if time.minute() > ROUND_UP_MIN_EXCLUSIVE {
        // 23 + 1 wraps to 0
        RoundedTime::from_half_hours(time.hour() + 1, false)
    } else if time.minute() <= ROUND_DOWN_MAX_MINUTE {
        RoundedTime::from_half_hours(time.hour(), false)
    } else {
        RoundedTime::from_half_hours(time.hour(), true)
    }
}
