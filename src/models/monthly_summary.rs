//! Monthly summary model.
//!
//! This module contains the [`MonthlySummary`] type, the per-month rollup of
//! a user's entries that backs the monthly view and payslip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Entry;

/// Aggregated totals of one user's entries for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The user the summary is for.
    pub user_id: Uuid,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// The month's entries, oldest date first.
    pub entries: Vec<Entry>,
    /// Number of days with an entry.
    pub days_worked: usize,
    /// Sum of present hours.
    pub total_present_hours: Decimal,
    /// Sum of overtime hours.
    pub total_ot_hours: Decimal,
    /// Sum of present amounts.
    pub total_present_amount: Decimal,
    /// Sum of overtime amounts.
    pub total_ot_amount: Decimal,
    /// Sum of PF deductions.
    pub total_pf: Decimal,
    /// Sum of daily salaries, rounded to 2 decimal places.
    pub monthly_total: Decimal,
}

impl MonthlySummary {
    /// Gross pay for the month before PF.
    pub fn gross_total(&self) -> Decimal {
        self.total_present_amount + self.total_ot_amount
    }
}
