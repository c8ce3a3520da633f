//! SPC Oxide: interactive statistical-process-control variation analysis
//!
//! A sample series is loaded once; the user narrows an index/value window over
//! it and a statistics table (average, cpk, natural variation limits, failure
//! counts) is recomputed for every accepted edit.

// Application constants
pub mod constants;

// Error handling
pub mod error;

// Analysis configuration
pub mod config;

// Sample loading and the statistics engine
pub mod data;

// Session state: window, edit rules, statistics table
pub mod state;

// Saved reports
pub mod report;

// Presentation-side input models
pub mod widgets;

// Text output and console commands
pub mod ui;

pub use config::AnalysisConfig;
pub use error::{Rejection, Result, SpcError, StatsError};
pub use state::{AnalysisSession, BoundField, SeriesBounds};
