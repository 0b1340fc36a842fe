//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollOptions;

use super::types::{EngineConfig, ExportConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Overtime multiplier and salary-slip settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Overtime multiplier: {}", loader.config().overtime_multiplier);
/// # Ok::<(), attendance_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `engine.yaml` cannot be read.
    /// - [`EngineError::ConfigParseError`] if it is not valid YAML, or if the
    ///   overtime multiplier is negative.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;

        if config.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: config_path.display().to_string(),
                message: format!(
                    "overtime_multiplier cannot be negative, got {}",
                    config.overtime_multiplier
                ),
            });
        }

        Ok(Self { config })
    }

    /// Creates a loader around an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the salary-slip settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }

    /// Returns computation options derived from the configuration.
    pub fn payroll_options(&self) -> PayrollOptions {
        self.config.payroll_options()
    }
}
