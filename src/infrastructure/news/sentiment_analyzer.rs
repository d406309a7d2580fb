//! Headline sentiment scoring with VADER.
//!
//! # Example
//! ```rust,ignore
//! use trendsage::infrastructure::news::sentiment_analyzer::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! let samples = analyzer.score_texts(&["Apple beats earnings expectations".to_string()]);
//! let summary = summarize(&samples);
//! ```

use crate::application::analysis::interpreters::interpret_sentiment;
use crate::domain::sentiment::{SentimentSample, SentimentScorer, SentimentSummary};
use crate::domain::signals::SentimentLabel;
use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER compound-score analyser, constructed once and passed to callers
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score each non-blank text
    pub fn score_texts(&self, texts: &[String]) -> Vec<SentimentSample> {
        texts
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| SentimentSample {
                text: t.clone(),
                score: self.score(t),
            })
            .collect()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

/// Average score (rounded to 4 decimals) and per-regime counts
pub fn summarize(samples: &[SentimentSample]) -> SentimentSummary {
    if samples.is_empty() {
        return SentimentSummary::default();
    }

    let total = samples.len();
    let average = samples.iter().map(|s| s.score).sum::<f64>() / total as f64;

    let mut summary = SentimentSummary {
        average: (average * 10_000.0).round() / 10_000.0,
        total,
        ..SentimentSummary::default()
    };
    for sample in samples {
        match interpret_sentiment(sample.score) {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
            SentimentLabel::Negative => summary.negative += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(score: f64) -> SentimentSample {
        SentimentSample {
            text: String::new(),
            score,
        }
    }

    #[test]
    fn test_polarity_of_headlines() {
        let analyzer = SentimentAnalyzer::new();

        let positive = analyzer.score("Great quarter, the company delivers excellent growth");
        assert!(positive >= 0.05, "got {}", positive);

        let negative = analyzer.score("Terrible results, investors are angry and worried");
        assert!(negative <= -0.05, "got {}", negative);
    }

    #[test]
    fn test_empty_text() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score(""), 0.0);
        assert_eq!(analyzer.score("   "), 0.0);
        assert!(analyzer.score_texts(&["  ".to_string()]).is_empty());
    }

    #[test]
    fn test_summary_counts_regimes() {
        let summary = summarize(&[sample(0.05), sample(-0.05), sample(0.0), sample(0.61237)]);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.average, 0.1531);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(summarize(&[]), SentimentSummary::default());
    }
}
