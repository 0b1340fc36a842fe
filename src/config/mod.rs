//! Configuration loading and management for the payroll engine.
//!
//! This module loads the engine's tunables (the overtime multiplier) and the
//! salary-slip settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Slip currency: {}", config.export().currency);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DEFAULT_CURRENCY, DEFAULT_DECIMAL_PLACES, EngineConfig, ExportConfig};
