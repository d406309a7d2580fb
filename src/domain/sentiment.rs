use serde::{Deserialize, Serialize};

/// A scored piece of text (headline, tweet, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSample {
    pub text: String,
    pub score: f64, // compound, -1.0 to 1.0
}

/// Aggregate over a batch of scored samples
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub average: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
}

pub trait SentimentScorer: Send + Sync {
    /// Compound polarity score between -1.0 and 1.0
    fn score(&self, text: &str) -> f64;
}
