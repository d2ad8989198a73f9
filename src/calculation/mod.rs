//! Calculation logic for the Daily Wage Engine.
//!
//! This module contains the salary computation pipeline: company time
//! rounding, hours derivation from the rounded pair, the present/overtime/PF
//! wage decomposition, the composed per-entry pipeline, and the monthly
//! aggregation of stored entries.

mod hours;
mod monthly;
mod pipeline;
mod rounding;
mod wage;

pub use hours::hours_between;
pub use monthly::summarize_month;
pub use pipeline::{EntryCalculation, compute_entry_salary};
pub use rounding::{ROUND_DOWN_MAX_MINUTE, ROUND_UP_MIN_EXCLUSIVE, round_time};
pub use wage::{
    DEFAULT_PF_RATE, FULL_DAY_HOURS, MAX_PF_RATE, compute_wage, round_to_cents, sum_amounts,
    validate_rates,
};
