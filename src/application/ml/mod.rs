// Window predictor capability and implementations
pub mod linear_predictor;
pub mod predictor;
pub mod smartcore_predictor;

// Training pipeline and persisted model
pub mod artifact;
pub mod trainer;
