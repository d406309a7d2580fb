use serde::{Deserialize, Serialize};
use std::fmt;

/// Net direction of a forecast trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Up,
    Neutral,
    Down,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Up => write!(f, "up"),
            TrendLabel::Neutral => write!(f, "neutral"),
            TrendLabel::Down => write!(f, "down"),
        }
    }
}

/// Polarity of a compound news-sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// RSI momentum regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsiLabel {
    Oversold,
    Neutral,
    Overbought,
}

impl fmt::Display for RsiLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiLabel::Oversold => write!(f, "oversold"),
            RsiLabel::Neutral => write!(f, "neutral"),
            RsiLabel::Overbought => write!(f, "overbought"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Hold,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "Buy"),
            Action::Hold => write!(f, "Hold"),
            Action::Sell => write!(f, "Sell"),
        }
    }
}

/// Classified signals plus the action they produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub trend: TrendLabel,
    pub sentiment: SentimentLabel,
    pub rsi: RsiLabel,
    pub action: Action,
}

impl fmt::Display for RecommendationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Forecast Trend: {} | Sentiment: {} | RSI: {} | Recommendation: {}",
            self.trend, self.sentiment, self.rsi, self.action
        )
    }
}
