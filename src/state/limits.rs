//! Validation of proposed window edits
//!
//! An edit passes four gates in order: it must parse, it must change something,
//! it must not cross the opposing bound, and it is clamped to the natural extent.

use crate::data::stats::round_to;
use crate::error::Rejection;
use crate::state::bounds::{BoundField, SeriesBounds};

/// Edit rules for one series: its natural extent and the display precision
#[derive(Debug, Clone, Copy)]
pub struct LimitAdjustment {
    extent: SeriesBounds,
    precision: u32,
}

impl LimitAdjustment {
    pub fn new(extent: SeriesBounds, precision: u32) -> Self {
        Self { extent, precision }
    }

    pub fn extent(&self) -> &SeriesBounds {
        &self.extent
    }

    /// Validate `raw` as the new value of `field` and merge it into `current`
    ///
    /// Value fields are compared at the display precision, so an edit finer than
    /// the precision is a `NoChange`.
    pub fn propose(
        &self,
        current: &SeriesBounds,
        field: BoundField,
        raw: &str,
    ) -> Result<SeriesBounds, Rejection> {
        let value = parse(field, raw)?;

        if self.same_as_displayed(current.get(field), value, field) {
            return Err(Rejection::NoChange {
                field,
                value: current.get(field),
            });
        }

        let opposing = field.opposing();
        let opposing_value = current.get(opposing);
        let inverted = match field {
            BoundField::IndexMin | BoundField::ValueMin => value > opposing_value,
            BoundField::IndexMax | BoundField::ValueMax => value < opposing_value,
        };
        if inverted {
            return Err(Rejection::OutOfOrder {
                field,
                value,
                opposing,
                opposing_value,
            });
        }

        let mut next = *current;
        match field {
            BoundField::IndexMin => next.index_min = self.clamp_index(value),
            BoundField::IndexMax => next.index_max = self.clamp_index(value),
            BoundField::ValueMin => next.value_min = self.clamp_value(value),
            BoundField::ValueMax => next.value_max = self.clamp_value(value),
        }
        Ok(next)
    }

    /// Text an input for `field` should display for `bounds`
    pub fn display(&self, bounds: &SeriesBounds, field: BoundField) -> String {
        let value = bounds.get(field);
        if field.is_index() {
            format!("{}", value as usize)
        } else {
            format!("{}", round_to(value, self.precision))
        }
    }

    fn same_as_displayed(&self, current: f64, proposed: f64, field: BoundField) -> bool {
        if field.is_index() {
            current == proposed
        } else {
            round_to(current, self.precision) == round_to(proposed, self.precision)
        }
    }

    fn clamp_index(&self, value: f64) -> usize {
        value.clamp(self.extent.index_min as f64, self.extent.index_max as f64) as usize
    }

    fn clamp_value(&self, value: f64) -> f64 {
        value.clamp(self.extent.value_min, self.extent.value_max)
    }
}

/// Integers for index fields, finite floats for value fields
fn parse(field: BoundField, raw: &str) -> Result<f64, Rejection> {
    let text = raw.trim();
    let not_a_number = || Rejection::NotANumber {
        field,
        raw: raw.to_string(),
    };

    if field.is_index() {
        text.parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| not_a_number())
    } else {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(not_a_number)
    }
}
