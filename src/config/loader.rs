//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, validate_pf_percentage};

/// Loads and provides access to engine settings.
///
/// # Example
///
/// ```no_run
/// use daily_wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/settings.yaml").unwrap();
/// println!("Listening on {}", loader.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads settings from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - the file does not exist (`ConfigNotFound`)
    /// - the file is not valid YAML for [`EngineConfig`] (`ConfigParseError`)
    /// - the default PF percentage is outside `0..=50` (`InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses settings from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        validate_pf_percentage(config.payroll.default_pf_percentage)?;

        Ok(Self { config })
    }

    /// Returns the underlying settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the socket address the server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Returns the PF percentage used until an admin changes it.
    pub fn default_pf_percentage(&self) -> Decimal {
        self.config.payroll.default_pf_percentage
    }
}
