use crate::application::analysis::explanation::{ExplainInput, ExplanationBuilder, PriceFrame};
use crate::application::forecasting::service::ForecastService;
use crate::config::Config;
use crate::domain::errors::{ExplainError, ForecastError};
use crate::domain::forecast::ForecastTrajectory;
use crate::domain::market::PriceSeries;
use crate::domain::signals::RecommendationResult;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// A recommendation together with the trajectory it was based on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    /// `None` when the recent closes stood in for a forecast
    pub forecast: Option<ForecastTrajectory>,
    pub recommendation: RecommendationResult,
}

/// Entry point for hosts: forecasting plus signal fusion
pub struct Advisor {
    forecasts: ForecastService,
    explainer: ExplanationBuilder,
}

impl Advisor {
    pub fn new(forecasts: ForecastService, explainer: ExplanationBuilder) -> Self {
        Self {
            forecasts,
            explainer,
        }
    }

    pub fn from_config(config: &Config, forecasts: ForecastService) -> Self {
        Self::new(
            forecasts,
            ExplanationBuilder::new(config.pseudo_forecast_len, config.default_rsi),
        )
    }

    pub fn forecast(
        &self,
        series: &PriceSeries,
        horizon: usize,
    ) -> Result<ForecastTrajectory, ForecastError> {
        self.forecasts.forecast(series, horizon)
    }

    pub fn recommend(
        &self,
        input: &ExplainInput,
        sentiment_score: f64,
        rsi_value: Option<f64>,
    ) -> RecommendationResult {
        self.explainer.explain_with_rsi(input, sentiment_score, rsi_value)
    }

    pub fn recommend_value(
        &self,
        input: Value,
        sentiment_score: f64,
        rsi_value: Option<f64>,
    ) -> Result<RecommendationResult, ExplainError> {
        self.explainer.explain_value(input, sentiment_score, rsi_value)
    }

    /// Forecast then recommend.
    ///
    /// Without a loaded model the recent closes stand in for the forecast,
    /// whatever the horizon. Every other forecast failure is returned to the
    /// caller.
    pub fn advise(
        &self,
        series: &PriceSeries,
        horizon: usize,
        sentiment_score: f64,
        rsi_value: Option<f64>,
    ) -> Result<Advice, ForecastError> {
        let (forecast, input) = match self.forecast(series, horizon) {
            Ok(trajectory) => {
                let input = ExplainInput::from(&trajectory);
                (Some(trajectory), input)
            }
            Err(ForecastError::ModelUnavailable { reason }) => {
                warn!(
                    "Model unavailable ({}), falling back to recent closes as pseudo-forecast",
                    reason
                );
                (None, ExplainInput::Table(PriceFrame::from_series(series)))
            }
            Err(e) => return Err(e),
        };

        let recommendation = self.recommend(&input, sentiment_score, rsi_value);
        info!("Recommendation: {}", recommendation);
        Ok(Advice {
            forecast,
            recommendation,
        })
    }
}
