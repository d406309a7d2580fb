//! Packages classified signals and the resulting action.
//!
//! Missing opinion signals never fail an explanation: an absent or empty RSI
//! column falls back to the neutral default, and a missing forecast falls back
//! to the most recent closes. Only an input that is neither a price table nor
//! a list of prices is rejected.

use super::engine;
use crate::domain::errors::ExplainError;
use crate::domain::forecast::ForecastTrajectory;
use crate::domain::market::PriceSeries;
use crate::domain::signals::RecommendationResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_PSEUDO_FORECAST_LEN: usize = 30;
pub const DEFAULT_RSI: f64 = 50.0;

/// Column-oriented price table. Cells may be missing (`null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceFrame {
    #[serde(default, alias = "Close")]
    pub close: Vec<Option<f64>>,
    #[serde(default, alias = "Forecast", skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "RSI", skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Vec<Option<f64>>>,
}

impl PriceFrame {
    pub fn from_series(series: &PriceSeries) -> Self {
        Self {
            close: series.closes().iter().map(|c| Some(*c)).collect(),
            ..Self::default()
        }
    }

    pub fn with_forecast(mut self, trajectory: &ForecastTrajectory) -> Self {
        self.forecast = Some(trajectory.prices().into_iter().map(Some).collect());
        self
    }

    pub fn with_rsi(mut self, rsi: Vec<Option<f64>>) -> Self {
        self.rsi = Some(rsi);
        self
    }

    fn has_columns(&self) -> bool {
        !self.close.is_empty() || self.forecast.is_some()
    }
}

/// Primary argument of an explanation
#[derive(Debug, Clone, PartialEq)]
pub enum ExplainInput {
    Table(PriceFrame),
    Prices(Vec<f64>),
}

impl From<&ForecastTrajectory> for ExplainInput {
    fn from(trajectory: &ForecastTrajectory) -> Self {
        ExplainInput::Prices(trajectory.prices())
    }
}

impl From<PriceFrame> for ExplainInput {
    fn from(frame: PriceFrame) -> Self {
        ExplainInput::Table(frame)
    }
}

impl From<Vec<f64>> for ExplainInput {
    fn from(prices: Vec<f64>) -> Self {
        ExplainInput::Prices(prices)
    }
}

impl TryFrom<Value> for ExplainInput {
    type Error = ExplainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
                .map(ExplainInput::Prices)
                .ok_or_else(|| ExplainError::UnsupportedInputType {
                    found: "array containing non-numeric values".to_string(),
                }),
            Value::Object(_) => {
                let frame: PriceFrame = serde_json::from_value(value).map_err(|e| {
                    ExplainError::UnsupportedInputType {
                        found: format!("malformed table ({})", e),
                    }
                })?;
                if !frame.has_columns() {
                    return Err(ExplainError::UnsupportedInputType {
                        found: "table without close or forecast column".to_string(),
                    });
                }
                Ok(ExplainInput::Table(frame))
            }
            Value::Null => Err(unsupported("null")),
            Value::Bool(_) => Err(unsupported("boolean")),
            Value::Number(_) => Err(unsupported("number")),
            Value::String(_) => Err(unsupported("string")),
        }
    }
}

fn unsupported(kind: &str) -> ExplainError {
    ExplainError::UnsupportedInputType {
        found: kind.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplanationBuilder {
    pseudo_forecast_len: usize,
    default_rsi: f64,
}

impl Default for ExplanationBuilder {
    fn default() -> Self {
        Self {
            pseudo_forecast_len: DEFAULT_PSEUDO_FORECAST_LEN,
            default_rsi: DEFAULT_RSI,
        }
    }
}

impl ExplanationBuilder {
    pub fn new(pseudo_forecast_len: usize, default_rsi: f64) -> Self {
        Self {
            pseudo_forecast_len,
            default_rsi,
        }
    }

    pub fn explain(&self, input: &ExplainInput, sentiment_score: f64) -> RecommendationResult {
        self.explain_with_rsi(input, sentiment_score, None)
    }

    /// `rsi_value` overrides whatever RSI the input carries.
    pub fn explain_with_rsi(
        &self,
        input: &ExplainInput,
        sentiment_score: f64,
        rsi_value: Option<f64>,
    ) -> RecommendationResult {
        let (prices, input_rsi) = match input {
            ExplainInput::Table(frame) => (self.frame_prices(frame), self.frame_rsi(frame)),
            ExplainInput::Prices(prices) => (prices.clone(), self.default_rsi),
        };
        let rsi = rsi_value.unwrap_or(input_rsi);

        debug!(
            "Explaining {} prices, sentiment {:.4}, RSI {:.2}",
            prices.len(),
            sentiment_score,
            rsi
        );
        engine::recommend(&prices, sentiment_score, rsi)
    }

    /// Same as [`explain_with_rsi`](Self::explain_with_rsi) for untyped JSON input.
    pub fn explain_value(
        &self,
        value: Value,
        sentiment_score: f64,
        rsi_value: Option<f64>,
    ) -> Result<RecommendationResult, ExplainError> {
        let input = ExplainInput::try_from(value)?;
        Ok(self.explain_with_rsi(&input, sentiment_score, rsi_value))
    }

    fn frame_prices(&self, frame: &PriceFrame) -> Vec<f64> {
        match &frame.forecast {
            Some(forecast) => forecast.iter().flatten().copied().collect(),
            None => {
                debug!(
                    "No forecast column, using last {} closes as pseudo-forecast",
                    self.pseudo_forecast_len
                );
                let closes: Vec<f64> = frame.close.iter().flatten().copied().collect();
                let start = closes.len().saturating_sub(self.pseudo_forecast_len);
                closes[start..].to_vec()
            }
        }
    }

    fn frame_rsi(&self, frame: &PriceFrame) -> f64 {
        frame
            .rsi
            .as_ref()
            .and_then(|column| column.iter().rev().flatten().next().copied())
            .unwrap_or(self.default_rsi)
    }
}
