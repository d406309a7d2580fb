//! Min-max normalisation of price series.
//!
//! Values outside the fitted range (extrapolated forecasts) are not clamped:
//! they simply land outside `[0, 1]` and invert back to prices outside
//! `[min, max]`.

use crate::domain::errors::ForecastError;
use crate::domain::forecast::ScalingContext;

pub fn fit(values: &[f64]) -> Result<ScalingContext, ForecastError> {
    if values.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Ok(ScalingContext { min, max })
}

pub fn transform(values: &[f64], context: &ScalingContext) -> Vec<f64> {
    if context.is_degenerate() {
        return vec![0.0; values.len()];
    }

    let range = context.range();
    values.iter().map(|v| (v - context.min) / range).collect()
}

pub fn inverse(values: &[f64], context: &ScalingContext) -> Vec<f64> {
    if context.is_degenerate() {
        return vec![context.min; values.len()];
    }

    let range = context.range();
    values.iter().map(|v| v * range + context.min).collect()
}
