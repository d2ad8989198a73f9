//! Daily entry model.
//!
//! An [`Entry`] is the persisted snapshot of one worker's day: the times as
//! submitted, the times after rounding, the rates in effect at creation, and
//! the resulting [`WageBreakdown`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TimeOfDay, WageBreakdown};

/// One worker's logged day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The user the entry belongs to.
    pub user_id: Uuid,
    /// The calendar date worked. At most one entry per user per date.
    pub date: NaiveDate,
    /// In-time after rounding (or as set by an admin edit).
    pub in_time: TimeOfDay,
    /// Out-time after rounding (or as set by an admin edit).
    pub out_time: TimeOfDay,
    /// In-time text exactly as submitted.
    pub original_in_time: String,
    /// Out-time text exactly as submitted.
    pub original_out_time: String,
    /// The user's daily rate when the entry was created.
    pub used_daily_salary_rate: Decimal,
    /// The PF fraction when the entry was created.
    pub used_pf_rate: Decimal,
    /// The computed wage snapshot.
    pub breakdown: WageBreakdown,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Returns true if the entry's date falls in the given year and month.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_wage_engine::models::{Entry, TimeOfDay, WageBreakdown};
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let entry = Entry {
    ///     id: Uuid::new_v4(),
    ///     user_id: Uuid::new_v4(),
    ///     date: NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
    ///     in_time: "09:00".parse().unwrap(),
    ///     out_time: "17:00".parse().unwrap(),
    ///     original_in_time: "09:05".to_string(),
    ///     original_out_time: "17:10".to_string(),
    ///     used_daily_salary_rate: Decimal::from(1000),
    ///     used_pf_rate: Decimal::new(12, 2),
    ///     breakdown: WageBreakdown {
    ///         present_hours: Decimal::from(8),
    ///         ot_hours: Decimal::ZERO,
    ///         present_amount: Decimal::from(1000),
    ///         ot_amount: Decimal::ZERO,
    ///         pf: Decimal::from(120),
    ///         daily_salary: Decimal::from(880),
    ///     },
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    /// assert!(entry.is_in_month(2025, 2));
    /// assert!(!entry.is_in_month(2025, 3));
    /// ```
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Returns the net pay stored for this day.
    pub fn daily_salary(&self) -> Decimal {
        self.breakdown.daily_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(date: NaiveDate) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date,
            in_time: "10:00".parse().unwrap(),
            out_time: "18:00".parse().unwrap(),
            original_in_time: "09:50".to_string(),
            original_out_time: "18:10".to_string(),
            used_daily_salary_rate: Decimal::from(1355),
            used_pf_rate: Decimal::new(12, 2),
            breakdown: WageBreakdown {
                present_hours: Decimal::from(8),
                ot_hours: Decimal::ZERO,
                present_amount: Decimal::from(1355),
                ot_amount: Decimal::ZERO,
                pf: Decimal::new(16260, 2),
                daily_salary: Decimal::new(119240, 2),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_in_month_checks_year_too() {
        let entry = sample_entry(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(entry.is_in_month(2024, 12));
        assert!(!entry.is_in_month(2025, 12));
    }

    #[test]
    fn test_daily_salary_reads_snapshot() {
        let entry = sample_entry(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(entry.daily_salary(), Decimal::new(119240, 2));
    }

    #[test]
    fn test_entry_serialization_uses_hh_mm_times() {
        let entry = sample_entry(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"date\":\"2025-01-06\""));
        assert!(json.contains("\"in_time\":\"10:00\""));
        assert!(json.contains("\"original_in_time\":\"09:50\""));
        assert!(json.contains("\"used_pf_rate\":\"0.12\""));

        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }
}
