//! Statistics engine: pure functions over a numeric window
//!
//! Nothing here rounds. Rounding belongs to the statistics table, after all
//! composition is done.

use crate::constants::spc::{CPK_SIGMA_MULTIPLIER, MOVING_RANGE_SPAN, NATURAL_LIMIT_FACTOR};
use crate::error::StatsError;

type StatsResult<T> = std::result::Result<T, StatsError>;

fn require(operation: &'static str, values: &[f64], required: usize) -> StatsResult<()> {
    if values.len() < required {
        return Err(StatsError::InsufficientData {
            operation,
            required,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean
pub fn average(values: &[f64]) -> StatsResult<f64> {
    require("Average", values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of |y[i] - y[i + window - 1]| over every valid i.
///
/// A window shorter than two samples holds no range and is rejected.
pub fn moving_range_average(values: &[f64], window: usize) -> StatsResult<f64> {
    if window < MOVING_RANGE_SPAN {
        return Err(StatsError::InsufficientData {
            operation: "Moving range average",
            required: MOVING_RANGE_SPAN,
            actual: window,
        });
    }
    require("Moving range average", values, window)?;

    let span = window - 1;
    let total: f64 = values
        .iter()
        .zip(&values[span..])
        .map(|(left, right)| (left - right).abs())
        .sum();

    Ok(total / (values.len() - span) as f64)
}

/// Natural variation limits `(lower, upper)`: average ± 2.66 × average moving range
pub fn variation_limits(values: &[f64]) -> StatsResult<(f64, f64)> {
    let mean = average(values)?;
    let spread = NATURAL_LIMIT_FACTOR * moving_range_average(values, MOVING_RANGE_SPAN)?;
    Ok((mean - spread, mean + spread))
}

/// Population standard deviation (divides by n)
pub fn population_std_dev(values: &[f64]) -> StatsResult<f64> {
    let mean = average(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Capability index: distance from the mean to the nearer limit, in units of 3σ
pub fn capability_index(values: &[f64], lower: f64, upper: f64) -> StatsResult<f64> {
    let mean = average(values)?;
    let sigma = population_std_dev(values)?;
    // Constant data can still leave a sigma of a few ulps from summation noise
    let constant = values.iter().all(|v| *v == values[0]);
    if constant || sigma <= 0.0 {
        return Err(StatsError::DivisionByZero {
            operation: "Capability index",
        });
    }

    let nearest = (upper - mean).min(mean - lower);
    Ok(nearest / (CPK_SIGMA_MULTIPLIER * sigma))
}

/// Samples strictly outside `[lower, upper]`, as `(count, percent)`
pub fn failure_count(values: &[f64], lower: f64, upper: f64) -> StatsResult<(usize, f64)> {
    require("Failure count", values, 1)?;
    let count = values.iter().filter(|&&v| v < lower || v > upper).count();
    Ok((count, count as f64 * 100.0 / values.len() as f64))
}

/// Round to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}
