//! Analysis session state
//!
//! The session owns the only mutable piece of an analysis, the active
//! [`SeriesBounds`], and keeps the statistics table in step with it. Every
//! accepted change recomputes the table; a rejected one leaves everything as it was.

mod bounds;
mod limits;
mod partition;
mod store;
mod table;

pub use bounds::{BoundField, SeriesBounds};
pub use limits::LimitAdjustment;
pub use partition::PartitionPlan;
pub use store::{PassThresholds, WindowedSeriesStore};
pub use table::{DerivedStatistics, StatKey, StatRow, StatValue, TableSection, TableSections};

use crate::data::Sample;
use crate::error::Rejection;
use serde::Serialize;

/// Horizontal reference line positions for the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceLines {
    pub average: Option<f64>,
    pub variation_lower: Option<f64>,
    pub variation_upper: Option<f64>,
    pub pass_min: f64,
    pub pass_max: f64,
}

/// Serializable record of a session's inputs and outputs
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub title: String,
    pub thresholds: PassThresholds,
    pub extent: SeriesBounds,
    pub bounds: SeriesBounds,
    pub precision: u32,
    pub statistics: DerivedStatistics,
}

/// One interactive analysis over one series
pub struct AnalysisSession {
    title: String,
    store: WindowedSeriesStore,
    limits: LimitAdjustment,
    bounds: SeriesBounds,
    precision: u32,
    sections: TableSections,
    statistics: DerivedStatistics,
}

impl AnalysisSession {
    /// Start a session with the window at the full extent
    pub fn new(title: impl Into<String>, store: WindowedSeriesStore, precision: u32) -> Self {
        let extent = store.full_extent();
        let sections = TableSections::default();
        let statistics = store.statistics_with_sections(&extent, precision, sections);

        Self {
            title: title.into(),
            limits: LimitAdjustment::new(extent, precision),
            store,
            bounds: extent,
            precision,
            sections,
            statistics,
        }
    }

    /// Apply one edit to the window.
    ///
    /// On success the statistics are already recomputed when this returns.
    pub fn propose(&mut self, field: BoundField, raw: &str) -> Result<SeriesBounds, Rejection> {
        match self.limits.propose(&self.bounds, field, raw) {
            Ok(next) => {
                tracing::info!(%field, raw, "window edit accepted");
                self.apply(next);
                Ok(next)
            }
            Err(rejection) => {
                tracing::warn!(%field, raw, %rejection, "window edit rejected");
                Err(rejection)
            }
        }
    }

    /// Narrow the index window to a block range; value bounds are kept
    pub fn select_partitions(&mut self, plan: PartitionPlan) -> Result<SeriesBounds, Rejection> {
        let (index_min, index_max) = plan.index_range(self.store.len()).inspect_err(|rejection| {
            tracing::warn!(%rejection, "partition selection rejected");
        })?;

        let next = SeriesBounds {
            index_min,
            index_max,
            ..self.bounds
        };
        tracing::info!(index_min, index_max, "partition selected");
        self.apply(next);
        Ok(next)
    }

    /// Restore the full extent
    pub fn reset(&mut self) {
        self.apply(self.store.full_extent());
    }

    /// Choose the table sections to display
    pub fn set_sections(&mut self, sections: TableSections) {
        self.sections = sections;
        self.recompute();
    }

    fn apply(&mut self, bounds: SeriesBounds) {
        debug_assert!(bounds.is_within(self.limits.extent()));
        self.bounds = bounds;
        self.recompute();
    }

    fn recompute(&mut self) {
        profiling::scope!("AnalysisSession::recompute");
        self.statistics =
            self.store
                .statistics_with_sections(&self.bounds, self.precision, self.sections);
        tracing::debug!(bounds = ?self.bounds, rows = self.statistics.len(), "statistics recomputed");
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> &SeriesBounds {
        &self.bounds
    }

    pub fn extent(&self) -> &SeriesBounds {
        self.limits.extent()
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn sections(&self) -> TableSections {
        self.sections
    }

    pub fn statistics(&self) -> &DerivedStatistics {
        &self.statistics
    }

    pub fn store(&self) -> &WindowedSeriesStore {
        &self.store
    }

    /// Text an input for `field` should currently display
    pub fn display(&self, field: BoundField) -> String {
        self.limits.display(&self.bounds, field)
    }

    /// Points to plot for the current window
    pub fn filtered_view(&self) -> Vec<Sample> {
        self.store.filtered_view(&self.bounds)
    }

    /// Reference lines for the current window.
    ///
    /// Computed independently of the displayed sections so the chart keeps its
    /// lines when the table hides them.
    pub fn reference_lines(&self) -> ReferenceLines {
        let table = self.store.statistics_for(&self.bounds, self.precision);
        let thresholds = self.store.thresholds();
        ReferenceLines {
            average: table.number(StatKey::Average),
            variation_lower: table.number(StatKey::VariationMin),
            variation_upper: table.number(StatKey::VariationMax),
            pass_min: thresholds.min,
            pass_max: thresholds.max,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            title: self.title.clone(),
            thresholds: self.store.thresholds(),
            extent: *self.extent(),
            bounds: self.bounds,
            precision: self.precision,
            statistics: self.statistics.clone(),
        }
    }
}
