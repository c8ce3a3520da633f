//! Active data window

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which window bound an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundField {
    IndexMin,
    IndexMax,
    ValueMin,
    ValueMax,
}

impl BoundField {
    pub const ALL: [BoundField; 4] = [
        BoundField::IndexMin,
        BoundField::IndexMax,
        BoundField::ValueMin,
        BoundField::ValueMax,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BoundField::IndexMin => "index_min",
            BoundField::IndexMax => "index_max",
            BoundField::ValueMin => "value_min",
            BoundField::ValueMax => "value_max",
        }
    }

    /// Index fields take integers, value fields take floats
    pub fn is_index(self) -> bool {
        matches!(self, BoundField::IndexMin | BoundField::IndexMax)
    }

    /// The other bound on the same axis
    pub fn opposing(self) -> BoundField {
        match self {
            BoundField::IndexMin => BoundField::IndexMax,
            BoundField::IndexMax => BoundField::IndexMin,
            BoundField::ValueMin => BoundField::ValueMax,
            BoundField::ValueMax => BoundField::ValueMin,
        }
    }
}

impl fmt::Display for BoundField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown bound '{}'", s))
    }
}

/// Inclusive index and value bounds of the active window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub index_min: usize,
    pub index_max: usize,
    pub value_min: f64,
    pub value_max: f64,
}

impl SeriesBounds {
    /// Current value of one field, widened to f64
    pub fn get(&self, field: BoundField) -> f64 {
        match field {
            BoundField::IndexMin => self.index_min as f64,
            BoundField::IndexMax => self.index_max as f64,
            BoundField::ValueMin => self.value_min,
            BoundField::ValueMax => self.value_max,
        }
    }

    pub fn contains_index(&self, index: usize) -> bool {
        (self.index_min..=self.index_max).contains(&index)
    }

    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.value_min && value <= self.value_max
    }

    /// Both axes ordered and inside `extent`
    pub fn is_within(&self, extent: &SeriesBounds) -> bool {
        self.index_min <= self.index_max
            && self.value_min <= self.value_max
            && self.index_min >= extent.index_min
            && self.index_max <= extent.index_max
            && self.value_min >= extent.value_min
            && self.value_max <= extent.value_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in BoundField::ALL {
            assert_eq!(field.name().parse::<BoundField>().unwrap(), field);
        }
        assert!("x_min".parse::<BoundField>().is_err());
    }

    #[test]
    fn test_opposing_pairs() {
        assert_eq!(BoundField::IndexMin.opposing(), BoundField::IndexMax);
        assert_eq!(BoundField::ValueMax.opposing(), BoundField::ValueMin);
        assert!(BoundField::IndexMax.is_index());
        assert!(!BoundField::ValueMin.is_index());
    }

    #[test]
    fn test_is_within() {
        let extent = SeriesBounds {
            index_min: 0,
            index_max: 9,
            value_min: 1.0,
            value_max: 5.0,
        };
        let inner = SeriesBounds {
            index_min: 2,
            index_max: 4,
            value_min: 1.5,
            value_max: 5.0,
        };
        assert!(extent.is_within(&extent));
        assert!(inner.is_within(&extent));

        let inverted = SeriesBounds {
            index_min: 5,
            ..inner
        };
        assert!(!inverted.is_within(&extent));
    }
}
