// Min-max normalisation
pub mod scaler;

// Training windows and autoregressive rollout
pub mod windowed;

// Dated forecasts from a loaded predictor
pub mod service;
