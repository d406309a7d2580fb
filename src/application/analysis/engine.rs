use super::interpreters::{interpret_rsi, interpret_sentiment};
use super::trend;
use crate::domain::signals::{Action, RecommendationResult, RsiLabel, SentimentLabel, TrendLabel};

/// Strict conjunction of the three signals.
///
/// Buy and Sell need all three to agree; any partial agreement is Hold.
pub fn decide(trend: TrendLabel, sentiment: SentimentLabel, rsi: RsiLabel) -> Action {
    match (trend, sentiment, rsi) {
        (TrendLabel::Up, SentimentLabel::Positive, RsiLabel::Oversold) => Action::Buy,
        (TrendLabel::Down, SentimentLabel::Negative, RsiLabel::Overbought) => Action::Sell,
        _ => Action::Hold,
    }
}

/// Classify raw inputs and decide.
pub fn recommend(prices: &[f64], sentiment_score: f64, rsi_value: f64) -> RecommendationResult {
    let trend = trend::classify(prices);
    let sentiment = interpret_sentiment(sentiment_score);
    let rsi = interpret_rsi(rsi_value);

    RecommendationResult {
        trend,
        sentiment,
        rsi,
        action: decide(trend, sentiment, rsi),
    }
}
