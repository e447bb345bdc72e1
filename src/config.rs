//! Configuration for entropy analysis reports.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EntropyError, Result};

/// Entropy analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Size of the sliding window in bytes (default: 256).
    pub window_size: i64,
    /// Whether to keep per-window results in the report (default: true).
    pub positions: bool,
    /// Whether to compute whole-input entropy (default: true).
    pub overall: bool,
    /// Minimum change between consecutive windows reported as a cliff, in bits (default: 1.0).
    pub cliff_delta: f64,
    /// Bits above the mean window entropy that flag a window as anomalous (default: 0.5).
    pub anomaly_margin: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            positions: true,
            overall: true,
            cliff_delta: 1.0,
            anomaly_margin: 0.5,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that thresholds are usable.
    ///
    /// The window size is validated by the engine itself so that a bad
    /// value surfaces as `InvalidWindowSize` rather than a config error.
    pub fn validate(&self) -> Result<()> {
        if !self.cliff_delta.is_finite() || self.cliff_delta < 0.0 {
            return Err(EntropyError::Config(format!(
                "cliff_delta must be a non-negative number, got {}",
                self.cliff_delta
            )));
        }
        if !self.anomaly_margin.is_finite() {
            return Err(EntropyError::Config(format!(
                "anomaly_margin must be finite, got {}",
                self.anomaly_margin
            )));
        }
        Ok(())
    }
}
