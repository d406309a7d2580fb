// Market data domain
pub mod market;

// Scaling context and forecast trajectories
pub mod forecast;

// Signal regimes, actions and recommendation results
pub mod signals;

// Sentiment samples and summaries
pub mod sentiment;

// Domain-specific error types
pub mod errors;
