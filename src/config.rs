//! Scan configuration.
//!
//! ```yaml
//! precision: 4          # decimal digits kept for every measured distance (2..=10)
//! units: MM             # MM or IN, shown next to the result
//! validity_tolerance: 1.0e-12
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scan::Precision;

/// Length units of the source geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Millimetres.
    #[default]
    #[serde(rename = "MM", alias = "mm")]
    Millimetres,
    /// Inches.
    #[serde(rename = "IN", alias = "in")]
    Inches,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Millimetres => write!(f, "MM"),
            Units::Inches => write!(f, "IN"),
        }
    }
}

/// Settings for one minimum-distance run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Decimal digits kept for each measured distance.
    #[serde(default = "default_precision")]
    pub precision: u8,

    /// Units reported alongside the result.
    #[serde(default)]
    pub units: Units,

    /// Area below which a raw feature is treated as empty and skipped.
    #[serde(default = "default_validity_tolerance")]
    pub validity_tolerance: f64,
}

fn default_precision() -> u8 {
    4
}

fn default_validity_tolerance() -> f64 {
    1e-12
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            units: Units::default(),
            validity_tolerance: default_validity_tolerance(),
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with the given precision and default everything else.
    pub fn with_precision(precision: u8) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks every field range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.precision()?;
        if !self.validity_tolerance.is_finite() || self.validity_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.validity_tolerance));
        }
        Ok(())
    }

    /// Returns the validated rounding precision.
    pub fn precision(&self) -> Result<Precision, ConfigError> {
        Precision::new(self.precision)
    }
}
