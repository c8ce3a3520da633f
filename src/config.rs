//! Analysis configuration
//!
//! One JSON file describes an analysis: where the data lives, which columns to
//! read, the pass/fail thresholds and the display precision. It is loaded and
//! validated once at startup and never mutated afterwards.

use crate::constants::display::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::{Result, SpcError};
use crate::state::PassThresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_title() -> String {
    "Variation Analysis".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Chart and report title
    #[serde(rename = "analysis title", default = "default_title")]
    pub title: String,

    /// CSV or Parquet file holding the samples
    #[serde(rename = "data file path", alias = "excel file path")]
    pub data_file: PathBuf,

    /// Column used as the ordering key
    #[serde(rename = "x axis name")]
    pub x_column: String,

    /// Column holding the measured values
    #[serde(rename = "y axis name")]
    pub y_column: String,

    /// Lower pass/fail threshold
    #[serde(rename = "min passing value")]
    pub pass_min: f64,

    /// Upper pass/fail threshold
    #[serde(rename = "max passing value")]
    pub pass_max: f64,

    /// Decimal digits shown in the statistics table
    #[serde(rename = "rounding precision", default = "default_precision")]
    pub precision: u32,

    /// Write logs here instead of stderr
    #[serde(rename = "logging file path", default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Append saved snapshots here
    #[serde(rename = "report file path", default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config: AnalysisConfig = serde_json::from_str(&text)?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        config.validate()?;
        Ok(config)
    }

    /// Relative file paths are taken relative to the configuration file
    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.data_file);
        if let Some(p) = self.log_file.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.report_file.as_mut() {
            resolve(p);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pass_min.is_finite() || !self.pass_max.is_finite() {
            return Err(SpcError::Config(
                "passing values must be finite numbers".to_string(),
            ));
        }
        if self.pass_min > self.pass_max {
            return Err(SpcError::Config(format!(
                "min passing value {} exceeds max passing value {}",
                self.pass_min, self.pass_max
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(SpcError::Config(format!(
                "rounding precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.x_column.is_empty() || self.y_column.is_empty() {
            return Err(SpcError::Config("axis names must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> PassThresholds {
        PassThresholds {
            min: self.pass_min,
            max: self.pass_max,
        }
    }
}
