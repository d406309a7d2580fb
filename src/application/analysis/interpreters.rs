use crate::domain::signals::{RsiLabel, SentimentLabel};

/// Compound score at or above which sentiment is positive
pub const SENTIMENT_POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which sentiment is negative
pub const SENTIMENT_NEGATIVE_THRESHOLD: f64 = -0.05;
/// RSI strictly below this is oversold
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI strictly above this is overbought
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Inclusive thresholds: exactly 0.05 is positive, exactly -0.05 negative.
pub fn interpret_sentiment(score: f64) -> SentimentLabel {
    if score >= SENTIMENT_POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= SENTIMENT_NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Exclusive thresholds: exactly 30 and exactly 70 are neutral.
pub fn interpret_rsi(value: f64) -> RsiLabel {
    if value < RSI_OVERSOLD {
        RsiLabel::Oversold
    } else if value > RSI_OVERBOUGHT {
        RsiLabel::Overbought
    } else {
        RsiLabel::Neutral
    }
}
