//! Derived statistics table
//!
//! The table is the only place rounding happens: every engine result is
//! computed at full precision and rounded as it is inserted.

use crate::data::stats::{self, round_to};
use crate::error::StatsError;
use crate::state::store::PassThresholds;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Table section, toggled independently for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSection {
    /// Average and echoed pass/fail thresholds
    General,
    /// Failures, capability and natural variation limits
    Variation,
}

/// Which sections the table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableSections {
    pub general: bool,
    pub variation: bool,
}

impl Default for TableSections {
    fn default() -> Self {
        Self {
            general: true,
            variation: true,
        }
    }
}

impl TableSections {
    pub fn only(section: TableSection) -> Self {
        Self {
            general: section == TableSection::General,
            variation: section == TableSection::Variation,
        }
    }

    pub fn shows(&self, section: TableSection) -> bool {
        match section {
            TableSection::General => self.general,
            TableSection::Variation => self.variation,
        }
    }
}

/// Row identifiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    Average,
    PassMax,
    PassMin,
    FailureCount,
    FailurePercent,
    Cpk,
    VariationMax,
    VariationMin,
}

impl StatKey {
    pub const ALL: [StatKey; 8] = [
        StatKey::Average,
        StatKey::PassMax,
        StatKey::PassMin,
        StatKey::FailureCount,
        StatKey::FailurePercent,
        StatKey::Cpk,
        StatKey::VariationMax,
        StatKey::VariationMin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKey::Average => "average",
            StatKey::PassMax => "max passing threshold",
            StatKey::PassMin => "min passing threshold",
            StatKey::FailureCount => "failures (num)",
            StatKey::FailurePercent => "failures (%)",
            StatKey::Cpk => "cpk",
            StatKey::VariationMax => "max variation threshold",
            StatKey::VariationMin => "min variation threshold",
        }
    }

    pub fn section(self) -> TableSection {
        match self {
            StatKey::Average | StatKey::PassMax | StatKey::PassMin => TableSection::General,
            _ => TableSection::Variation,
        }
    }
}

/// A table cell
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Number(f64),
    Count(usize),
    /// Could not be computed over this window
    Undefined(StatsError),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Number(v) => Some(*v),
            StatValue::Count(c) => Some(*c as f64),
            StatValue::Undefined(_) => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, StatValue::Undefined(_))
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Number(v) => serializer.serialize_f64(*v),
            StatValue::Count(c) => serializer.serialize_u64(*c as u64),
            StatValue::Undefined(_) => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub key: StatKey,
    pub value: StatValue,
}

impl Serialize for StatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("StatRow", 2)?;
        row.serialize_field("calculation", self.key.label())?;
        row.serialize_field("value", &self.value)?;
        row.end()
    }
}

/// Name → value table over one window, in display order
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct DerivedStatistics {
    rows: Vec<StatRow>,
}

impl DerivedStatistics {
    /// Recompute every shown statistic over `values`
    pub fn compute(
        values: &[f64],
        thresholds: PassThresholds,
        precision: u32,
        sections: TableSections,
    ) -> Self {
        profiling::scope!("DerivedStatistics::compute");

        let round = |v: f64| StatValue::Number(round_to(v, precision));
        let number = |r: Result<f64, StatsError>| r.map_or_else(StatValue::Undefined, round);

        let failures = stats::failure_count(values, thresholds.min, thresholds.max);
        let limits = stats::variation_limits(values);

        let rows = StatKey::ALL
            .into_iter()
            .filter(|key| sections.shows(key.section()))
            .map(|key| {
                let value = match key {
                    StatKey::Average => number(stats::average(values)),
                    StatKey::PassMax => round(thresholds.max),
                    StatKey::PassMin => round(thresholds.min),
                    StatKey::FailureCount => failures
                        .clone()
                        .map_or_else(StatValue::Undefined, |(count, _)| StatValue::Count(count)),
                    StatKey::FailurePercent => number(failures.clone().map(|(_, pct)| pct)),
                    StatKey::Cpk => number(stats::capability_index(
                        values,
                        thresholds.min,
                        thresholds.max,
                    )),
                    StatKey::VariationMax => number(limits.clone().map(|(_, upper)| upper)),
                    StatKey::VariationMin => number(limits.clone().map(|(lower, _)| lower)),
                };
                StatRow { key, value }
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    pub fn get(&self, key: StatKey) -> Option<&StatValue> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.value)
    }

    /// Numeric value of a row that is shown and defined
    pub fn number(&self, key: StatKey) -> Option<f64> {
        self.get(key).and_then(StatValue::as_f64)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
