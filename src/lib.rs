//! Daily Wage Engine
//!
//! This crate turns a worker's clock-in and clock-out times into a daily
//! wage: times are rounded to the nearest half hour, hours beyond eight are
//! paid as overtime at the prorated hourly rate, and a provident-fund
//! deduction is taken from the present-hours amount only. Each computed
//! wage is stored as a snapshot alongside the day's entry and summed into
//! monthly totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
