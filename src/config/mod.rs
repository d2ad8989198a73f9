//! Configuration loading and management for the Daily Wage Engine.
//!
//! This module loads server and payroll settings from a YAML file and holds
//! the PF percentage bounds shared by the API and the store.
//!
//! # Example
//!
//! ```no_run
//! use daily_wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/settings.yaml").unwrap();
//! println!("Default PF: {}%", config.default_pf_percentage());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PF_PERCENTAGE, EngineConfig, MAX_PF_PERCENTAGE, PayrollConfig,
    ServerConfig, pf_fraction, validate_pf_percentage,
};
