//! Wage breakdown and audit trace models.
//!
//! This module contains the [`WageBreakdown`] snapshot produced for each
//! entry, along with the [`AuditTrace`] types that record how it was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The present/overtime/PF decomposition of one day's pay.
///
/// Every field is independently rounded to 2 decimal places, so
/// `present_amount + ot_amount - pf` may differ from `daily_salary` by a
/// cent or two. That drift is kept as-is.
///
/// # Example
///
/// ```
/// use daily_wage_engine::models::WageBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = WageBreakdown {
///     present_hours: Decimal::from(8),
///     ot_hours: Decimal::from(2),
///     present_amount: Decimal::from(1000),
///     ot_amount: Decimal::from(250),
///     pf: Decimal::from(120),
///     daily_salary: Decimal::from(1130),
/// };
/// assert_eq!(breakdown.gross_amount(), Decimal::from(1250));
/// assert_eq!(breakdown.rounding_drift(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBreakdown {
    /// Hours worked up to the 8-hour baseline.
    pub present_hours: Decimal,
    /// Hours worked beyond the baseline.
    pub ot_hours: Decimal,
    /// Pay for the present hours (flat daily rate once 8 hours are reached).
    pub present_amount: Decimal,
    /// Pay for the overtime hours, always prorated hourly.
    pub ot_amount: Decimal,
    /// Provident-fund deduction, levied on the present amount only.
    pub pf: Decimal,
    /// Net pay for the day.
    pub daily_salary: Decimal,
}

impl WageBreakdown {
    /// Total hours represented by this breakdown.
    pub fn total_hours(&self) -> Decimal {
        self.present_hours + self.ot_hours
    }

    /// Gross pay before the PF deduction, from the rounded fields.
    pub fn gross_amount(&self) -> Decimal {
        self.present_amount + self.ot_amount
    }

    /// Difference between the stored net and the net recomputed from the
    /// rounded components.
    pub fn rounding_drift(&self) -> Decimal {
        self.daily_salary - (self.present_amount + self.ot_amount - self.pf)
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but are
/// worth surfacing, such as per-field rounding drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for one entry calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}
