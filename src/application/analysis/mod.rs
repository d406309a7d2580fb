// Forecast trajectory direction
pub mod trend;

// Sentiment and RSI regimes
pub mod interpreters;

// Signal fusion
pub mod engine;

// Structured recommendation results
pub mod explanation;
