pub mod series;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use series::{Sample, SampleSeries};
pub use source::DataSource;
