use crate::domain::errors::ForecastError;

/// One-step regression capability used by the autoregressive rollout.
///
/// Implementations map a window of normalised prices (oldest first) to the
/// normalised value of the next step. They are read-only after construction
/// and may be shared between concurrent forecasts.
pub trait WindowPredictor: Send + Sync {
    fn predict_one(&self, window: &[f64]) -> Result<f64, ForecastError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
