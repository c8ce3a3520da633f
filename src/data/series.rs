//! Immutable, cleaned sample sequence

use crate::error::{Result, SpcError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One observation: ordering key (usually Unix seconds) and measured value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sorted, deduplicated samples shared read-only for a whole session
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: Arc<[Sample]>,
    y_min: f64,
    y_max: f64,
}

impl SampleSeries {
    /// Build a series from raw (x, y) pairs.
    ///
    /// Pairs with a non-finite coordinate are dropped (missing cells), the rest are
    /// sorted by (x, y) and exact duplicates removed.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut samples: Vec<Sample> = pairs
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(x, y)| Sample::new(x, y))
            .collect();

        samples.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        samples.dedup();

        if samples.is_empty() {
            return Err(SpcError::EmptyDataset);
        }

        let (y_min, y_max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.y), hi.max(s.y))
            });

        tracing::debug!(count = samples.len(), y_min, y_max, "sample series built");

        Ok(Self {
            samples: samples.into(),
            y_min,
            y_max,
        })
    }

    /// Build a series from y values alone, using the position as x
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::from_pairs(values.iter().enumerate().map(|(i, &y)| (i as f64, y)))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Cheap shared handle to the samples
    pub fn shared(&self) -> Arc<[Sample]> {
        Arc::clone(&self.samples)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let series = SampleSeries::from_pairs(vec![
            (3.0, 1.0),
            (1.0, 5.0),
            (1.0, 2.0),
            (3.0, 1.0),
            (2.0, 7.0),
        ])
        .unwrap();

        let xy: Vec<(f64, f64)> = series.samples().iter().map(|s| (s.x, s.y)).collect();
        assert_eq!(xy, vec![(1.0, 2.0), (1.0, 5.0), (2.0, 7.0), (3.0, 1.0)]);
        assert_eq!(series.y_min(), 1.0);
        assert_eq!(series.y_max(), 7.0);
    }

    #[test]
    fn test_missing_values_dropped() {
        let series =
            SampleSeries::from_pairs(vec![(0.0, f64::NAN), (1.0, 4.0), (f64::NAN, 2.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.samples()[0], Sample::new(1.0, 4.0));
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = SampleSeries::from_pairs(Vec::new()).unwrap_err();
        assert!(matches!(err, SpcError::EmptyDataset));

        let err = SampleSeries::from_values(&[f64::NAN]).unwrap_err();
        assert!(matches!(err, SpcError::EmptyDataset));
    }

    #[test]
    fn test_from_values_keeps_order() {
        let series = SampleSeries::from_values(&[10.0, 12.0, 11.0]).unwrap();
        let ys: Vec<f64> = series.samples().iter().map(|s| s.y).collect();
        assert_eq!(ys, vec![10.0, 12.0, 11.0]);
    }
}
