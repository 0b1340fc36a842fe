//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, PayrollOptions};

/// Default salary-slip currency code.
pub const DEFAULT_CURRENCY: &str = "INR";
/// Default salary-slip rounding.
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Salary-slip presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// ISO currency code printed on slips.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places money is rounded to on slips.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Top-level engine configuration (`engine.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Multiplier applied to the hourly rate for overtime minutes.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Salary-slip settings.
    #[serde(default)]
    pub export: ExportConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            export: ExportConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Builds the per-computation options from this configuration.
    pub fn payroll_options(&self) -> PayrollOptions {
        PayrollOptions::with_overtime_multiplier(self.overtime_multiplier)
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}
