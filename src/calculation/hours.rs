//! Hours derivation from a rounded in/out pair.

use rust_decimal::Decimal;

use crate::models::RoundedTime;

const MINUTES_PER_HOUR: i64 = 60;

/// Returns the hours between two rounded times on the same day.
///
/// There is no midnight wraparound: when `out_time` is earlier than
/// `in_time` the result is negative, and the caller must reject the entry.
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::hours_between;
/// use daily_wage_engine::models::RoundedTime;
/// use rust_decimal::Decimal;
///
/// let in_time = RoundedTime::new(10, 0).unwrap();
/// let out_time = RoundedTime::new(18, 30).unwrap();
/// assert_eq!(hours_between(in_time, out_time), Decimal::new(85, 1));
/// assert_eq!(hours_between(out_time, in_time), Decimal::new(-85, 1));
/// ```
pub fn hours_between(in_time: RoundedTime, out_time: RoundedTime) -> Decimal {
    let minutes = out_time.total_minutes() - in_time.total_minutes();
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}
