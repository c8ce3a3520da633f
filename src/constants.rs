//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the analysis, making them easier to maintain and configure.

/// Statistical Process Control (SPC) constants
pub mod spc {
    /// Scaling factor turning the average moving range (span 2) into natural
    /// variation limits. Equals 3 / d2 for subgroup size 2.
    pub const NATURAL_LIMIT_FACTOR: f64 = 2.66;

    /// Span of the moving range used for the variation limits
    pub const MOVING_RANGE_SPAN: usize = 2;

    /// Sigma multiplier in the capability index denominator
    pub const CPK_SIGMA_MULTIPLIER: f64 = 3.0;
}

/// Presentation defaults
pub mod display {
    /// Default rounding precision (decimal digits) for the statistics table
    pub const DEFAULT_PRECISION: u32 = 3;

    /// Largest precision accepted from configuration
    pub const MAX_PRECISION: u32 = 12;

    /// Text shown for a statistic that could not be computed
    pub const UNDEFINED_TEXT: &str = "undefined";
}

/// Index partition selector limits
pub mod partition {
    /// Smallest partition count offered by the selector
    pub const MIN_PARTITIONS: usize = 1;

    /// Largest partition count offered by the selector
    pub const MAX_PARTITIONS: usize = 10;
}

/// Date/time conversion constants
pub mod datetime {
    /// Seconds in one day (Date columns are stored as days since epoch)
    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Timestamp format written ahead of every saved report
    pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Configuration file paths
pub mod config {
    /// Configuration file name used when none is given on the command line
    pub const CONFIG_FILE: &str = "spc-oxide.json";
}
