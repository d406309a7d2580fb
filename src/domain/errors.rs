use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the scaler, the windowed forecaster and the forecast service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    #[error("Insufficient history: {len} observations for a window of {window}")]
    InsufficientHistory { len: usize, window: usize },

    #[error("Dimension mismatch: expected window of {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    #[error("Prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("Invalid horizon: must forecast at least one step")]
    InvalidHorizon,

    #[error("Invalid window: must use at least one observation")]
    InvalidWindow,
}

/// Errors raised while assembling a recommendation explanation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplainError {
    #[error("Unsupported input type: expected a price table or a list of prices, got {found}")]
    UnsupportedInputType { found: String },
}

/// Errors related to raw market data handed to the core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketDataError {
    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    NonIncreasingDates { previous: NaiveDate, next: NaiveDate },

    #[error("Invalid price {value} on {date}: prices must be finite and non-negative")]
    InvalidPrice { date: NaiveDate, value: f64 },

    #[error("Missing column: {column}")]
    MissingColumn { column: String },
}
