// Scaling, windowing and rollout
pub mod forecasting;

// Predictor capability, models and training
pub mod ml;

// Trend, regimes, fusion and explanations
pub mod analysis;

// Host-facing facade
pub mod advisor;
