//! Core data models for the Daily Wage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod entry;
mod monthly_summary;
mod time_of_day;
mod user;
mod wage_breakdown;

pub use entry::Entry;
pub use monthly_summary::MonthlySummary;
pub use time_of_day::{RoundedTime, TimeOfDay};
pub use user::{Designation, User, normalize_username};
pub use wage_breakdown::{AuditStep, AuditTrace, AuditWarning, WageBreakdown};
