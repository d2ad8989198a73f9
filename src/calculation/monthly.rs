//! Monthly aggregation of stored entries.
//!
//! Totals are summed from each entry's stored snapshot. Nothing is
//! recomputed, so a later change to a user's rate or the PF percentage never
//! alters a past month.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Entry, MonthlySummary};

use super::sum_amounts;

/// Builds the monthly summary for one user.
///
/// Entries outside the given month (or belonging to another user) are
/// ignored. The remaining entries are ordered by date, oldest first.
///
/// # Errors
///
/// Returns `InvalidPeriod` if `month` is not in `1..=12`, or
/// `AmountOverflow` if a total leaves the decimal range.
///
/// # Examples
///
/// ```
/// use daily_wage_engine::calculation::summarize_month;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let summary = summarize_month(Uuid::new_v4(), 2025, 6, &[]).unwrap();
/// assert_eq!(summary.days_worked, 0);
/// assert_eq!(summary.monthly_total, Decimal::ZERO);
/// assert!(summarize_month(Uuid::new_v4(), 2025, 13, &[]).is_err());
/// ```
pub fn summarize_month(
    user_id: Uuid,
    year: i32,
    month: u32,
    entries: &[Entry],
) -> EngineResult<MonthlySummary> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPeriod { year, month });
    }

    let mut month_entries: Vec<Entry> = entries
        .iter()
        .filter(|e| e.user_id == user_id && e.is_in_month(year, month))
        .cloned()
        .collect();
    month_entries.sort_by_key(|e| e.date);

    let sum = |field: fn(&Entry) -> Decimal, what: &str| -> EngineResult<Decimal> {
        sum_amounts(month_entries.iter().map(field), what)
    };

    let total_present_hours = sum(|e| e.breakdown.present_hours, "total_present_hours")?;
    let total_ot_hours = sum(|e| e.breakdown.ot_hours, "total_ot_hours")?;
    let total_present_amount = sum(|e| e.breakdown.present_amount, "total_present_amount")?;
    let total_ot_amount = sum(|e| e.breakdown.ot_amount, "total_ot_amount")?;
    let total_pf = sum(|e| e.breakdown.pf, "total_pf")?;
    let monthly_total = sum(|e| e.breakdown.daily_salary, "monthly_total")?;

    Ok(MonthlySummary {
        user_id,
        year,
        month,
        days_worked: month_entries.len(),
        entries: month_entries,
        total_present_hours,
        total_ot_hours,
        total_present_amount,
        total_ot_amount,
        total_pf,
        monthly_total,
    })
}
