//! Windowed view over the immutable sample series

use crate::data::{Sample, SampleSeries};
use crate::state::bounds::SeriesBounds;
use crate::state::table::{DerivedStatistics, TableSections};
use serde::{Deserialize, Serialize};

/// External pass/fail specification limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassThresholds {
    pub min: f64,
    pub max: f64,
}

/// Full sample series plus fixed thresholds; derives windows on demand
#[derive(Debug, Clone)]
pub struct WindowedSeriesStore {
    series: SampleSeries,
    thresholds: PassThresholds,
}

impl WindowedSeriesStore {
    pub fn new(series: SampleSeries, thresholds: PassThresholds) -> Self {
        Self { series, thresholds }
    }

    /// Natural bounds of the whole series
    pub fn full_extent(&self) -> SeriesBounds {
        SeriesBounds {
            index_min: 0,
            index_max: self.series.len() - 1,
            value_min: self.series.y_min(),
            value_max: self.series.y_max(),
        }
    }

    /// Samples inside both the index and the value window
    pub fn filtered_view(&self, bounds: &SeriesBounds) -> Vec<Sample> {
        profiling::scope!("WindowedSeriesStore::filtered_view");

        self.series
            .samples()
            .iter()
            .enumerate()
            .filter(|(index, sample)| {
                bounds.contains_index(*index) && bounds.contains_value(sample.y)
            })
            .map(|(_, sample)| *sample)
            .collect()
    }

    /// Y values of the filtered view
    pub fn filtered_values(&self, bounds: &SeriesBounds) -> Vec<f64> {
        self.filtered_view(bounds).iter().map(|s| s.y).collect()
    }

    /// Statistics table over the filtered view, every section shown
    pub fn statistics_for(&self, bounds: &SeriesBounds, precision: u32) -> DerivedStatistics {
        self.statistics_with_sections(bounds, precision, TableSections::default())
    }

    pub fn statistics_with_sections(
        &self,
        bounds: &SeriesBounds,
        precision: u32,
        sections: TableSections,
    ) -> DerivedStatistics {
        let values = self.filtered_values(bounds);
        DerivedStatistics::compute(&values, self.thresholds, precision, sections)
    }

    pub fn thresholds(&self) -> PassThresholds {
        self.thresholds
    }

    pub fn samples(&self) -> &[Sample] {
        self.series.samples()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always false: the series is never empty
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::table::StatKey;

    fn store(values: &[f64]) -> WindowedSeriesStore {
        let series = SampleSeries::from_values(values).unwrap();
        WindowedSeriesStore::new(series, PassThresholds { min: 8.0, max: 13.0 })
    }

    #[test]
    fn test_full_extent() {
        let store = store(&[10.0, 12.0, 11.0, 13.0, 9.0]);
        let extent = store.full_extent();
        assert_eq!(extent.index_min, 0);
        assert_eq!(extent.index_max, 4);
        assert_eq!(extent.value_min, 9.0);
        assert_eq!(extent.value_max, 13.0);
        assert_eq!(store.filtered_view(&extent).len(), 5);
    }

    #[test]
    fn test_filters_compose_by_dropping() {
        let store = store(&[10.0, 12.0, 11.0, 13.0, 9.0]);
        let bounds = SeriesBounds {
            index_min: 1,
            index_max: 4,
            value_min: 9.0,
            value_max: 12.0,
        };

        let view = store.filtered_view(&bounds);
        let xs: Vec<f64> = view.iter().map(|s| s.x).collect();
        let ys: Vec<f64> = view.iter().map(|s| s.y).collect();
        // index 0 dropped by the index window, 13.0 dropped by the value window
        assert_eq!(xs, vec![1.0, 2.0, 4.0]);
        assert_eq!(ys, vec![12.0, 11.0, 9.0]);
    }

    #[test]
    fn test_view_shrinks_monotonically() {
        let values: Vec<f64> = (0..40).map(|i| ((i * 7) % 13) as f64 + 0.5).collect();
        let store = store(&values);
        let mut bounds = store.full_extent();
        let mut previous = store.filtered_view(&bounds).len();

        for step in 0..10 {
            match step % 4 {
                0 => bounds.index_min += 2,
                1 => bounds.index_max -= 3,
                2 => bounds.value_min += 0.5,
                _ => bounds.value_max -= 0.5,
            }
            let current = store.filtered_view(&bounds).len();
            assert!(current <= previous, "step {step}: {current} > {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_statistics_restored_after_narrowing() {
        let store = store(&[10.0, 12.0, 11.0, 13.0, 9.0, 10.5, 11.5]);
        let extent = store.full_extent();
        let original = store.statistics_for(&extent, 3);

        let narrowed = SeriesBounds {
            index_min: 2,
            index_max: 5,
            value_min: 10.0,
            value_max: 12.0,
        };
        for _ in 0..3 {
            let partial = store.statistics_for(&narrowed, 3);
            assert_ne!(partial, original);
        }

        assert_eq!(store.statistics_for(&extent, 3), original);
    }

    #[test]
    fn test_statistics_over_empty_window() {
        let store = store(&[10.0, 12.0, 11.0]);
        let bounds = SeriesBounds {
            index_min: 1,
            index_max: 1,
            value_min: 10.0,
            value_max: 11.0,
        };
        assert!(store.filtered_view(&bounds).is_empty());

        let table = store.statistics_for(&bounds, 3);
        assert!(table.get(StatKey::Average).unwrap().is_undefined());
    }
}
