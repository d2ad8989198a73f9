//! Configuration types for the Daily Wage Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Default PF percentage (12%).
pub const DEFAULT_PF_PERCENTAGE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Highest PF percentage an admin may set (50%).
pub const MAX_PF_PERCENTAGE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_pf_percentage() -> Decimal {
    DEFAULT_PF_PERCENTAGE
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `"127.0.0.1:5000"`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Payroll settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// PF percentage applied until an admin changes it.
    #[serde(default = "default_pf_percentage")]
    pub default_pf_percentage: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_pf_percentage: default_pf_percentage(),
        }
    }
}

/// The complete settings file.
///
/// ```yaml
/// server:
///   bind_address: "127.0.0.1:5000"
/// payroll:
///   default_pf_percentage: 12
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Server section.
    #[serde(default)]
    pub server: ServerConfig,
    /// Payroll section.
    #[serde(default)]
    pub payroll: PayrollConfig,
}

/// Checks that a PF percentage lies within `0..=50`.
pub fn validate_pf_percentage(percentage: Decimal) -> EngineResult<()> {
    if percentage < Decimal::ZERO || percentage > MAX_PF_PERCENTAGE {
        return Err(EngineError::InvalidRate {
            field: "pf_percentage".to_string(),
            message: format!(
                "must be between 0 and {}, got {}",
                MAX_PF_PERCENTAGE, percentage
            ),
        });
    }
    Ok(())
}

/// Converts a PF percentage (e.g. `12`) into the fraction used by the
/// wage calculation (e.g. `0.12`).
pub fn pf_fraction(percentage: Decimal) -> Decimal {
    percentage / Decimal::ONE_HUNDRED
}
