use super::predictor::WindowPredictor;
use crate::domain::errors::ForecastError;

/// Deterministic baseline: continues the average step of the window.
///
/// `next = last + (last - first) / (len - 1)`. A single-element window
/// repeats its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl WindowPredictor for LinearExtrapolator {
    fn predict_one(&self, window: &[f64]) -> Result<f64, ForecastError> {
        match (window.first(), window.last()) {
            (Some(first), Some(last)) if window.len() > 1 => {
                Ok(last + (last - first) / (window.len() - 1) as f64)
            }
            (Some(last), _) => Ok(*last),
            _ => Err(ForecastError::PredictionFailed {
                reason: "empty window".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "Linear Extrapolator"
    }
}
