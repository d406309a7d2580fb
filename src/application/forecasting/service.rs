use super::scaler;
use super::windowed::WindowedForecaster;
use crate::application::ml::artifact::ModelArtifact;
use crate::application::ml::predictor::WindowPredictor;
use crate::domain::errors::ForecastError;
use crate::domain::forecast::{ForecastPoint, ForecastTrajectory, ScalingContext};
use crate::domain::market::PriceSeries;
use chrono::Days;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the min/max used to normalise a forecast request comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalingSource {
    /// Context persisted with a trained predictor
    Fitted(ScalingContext),
    /// Fit on each requested series (stateless predictors)
    PerSeries,
}

/// Turns a close series into a dated price trajectory.
///
/// Holds the loaded predictor for the lifetime of the host; the predictor is
/// never mutated, so one service can serve concurrent callers.
#[derive(Clone)]
pub struct ForecastService {
    forecaster: WindowedForecaster,
    predictor: Option<Arc<dyn WindowPredictor>>,
    scaling: ScalingSource,
}

impl ForecastService {
    pub fn new(
        predictor: Arc<dyn WindowPredictor>,
        scaling: ScalingSource,
        window_size: usize,
    ) -> Self {
        Self {
            forecaster: WindowedForecaster::new(window_size),
            predictor: Some(predictor),
            scaling,
        }
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        info!(
            "Forecast model ready: window {}, scaling [{:.4}, {:.4}], trained {} on {} observations",
            artifact.window_size,
            artifact.scaling.min,
            artifact.scaling.max,
            artifact.trained_at,
            artifact.observations
        );
        Self::new(
            Arc::new(artifact.predictor),
            ScalingSource::Fitted(artifact.scaling),
            artifact.window_size,
        )
    }

    /// A service with no predictor; every forecast fails with `ModelUnavailable`.
    pub fn unavailable(window_size: usize) -> Self {
        Self {
            forecaster: WindowedForecaster::new(window_size),
            predictor: None,
            scaling: ScalingSource::PerSeries,
        }
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn window_size(&self) -> usize {
        self.forecaster.window_size()
    }

    pub fn forecast(
        &self,
        series: &PriceSeries,
        horizon: usize,
    ) -> Result<ForecastTrajectory, ForecastError> {
        let predictor = self.predictor.as_deref().ok_or_else(|| {
            ForecastError::ModelUnavailable {
                reason: "no trained predictor loaded".to_string(),
            }
        })?;

        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon);
        }
        let last_date = series.last_date().ok_or(ForecastError::EmptySeries)?;

        let context = match self.scaling {
            ScalingSource::Fitted(context) => {
                let observed = scaler::fit(series.closes())?;
                if observed.min < context.min || observed.max > context.max {
                    warn!(
                        "Series range [{:.4}, {:.4}] exceeds the fitted scaling range [{:.4}, {:.4}]",
                        observed.min, observed.max, context.min, context.max
                    );
                }
                context
            }
            ScalingSource::PerSeries => scaler::fit(series.closes())?,
        };

        let window_size = self.forecaster.window_size();
        if series.len() < window_size {
            return Err(ForecastError::InsufficientHistory {
                len: series.len(),
                window: window_size,
            });
        }

        let seed = scaler::transform(series.tail(window_size), &context);
        let normalized = self.forecaster.predict(Some(predictor), &seed, horizon)?;
        let prices = scaler::inverse(&normalized, &context);

        let points = prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| -> Result<ForecastPoint, ForecastError> {
                let date = last_date
                    .checked_add_days(Days::new(i as u64 + 1))
                    .ok_or_else(|| ForecastError::PredictionFailed {
                        reason: format!("forecast step {} overflows the calendar", i + 1),
                    })?;
                Ok(ForecastPoint { date, price })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Forecast {} days with {} from {}",
            horizon,
            predictor.name(),
            last_date
        );
        Ok(ForecastTrajectory::new(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::linear_predictor::LinearExtrapolator;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    #[test]
    fn test_forecast_dates_follow_last_observation() {
        let closes: Vec<f64> = (0..5).map(|i| 10.0 + i as f64).collect();
        let series = PriceSeries::daily(start(), &closes).unwrap();
        let service =
            ForecastService::new(Arc::new(LinearExtrapolator), ScalingSource::PerSeries, 3);

        let trajectory = service.forecast(&series, 3).unwrap();
        let dates: Vec<NaiveDate> = trajectory.points().iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            ]
        );

        for (got, expected) in trajectory.prices().iter().zip([15.0, 16.0, 17.0]) {
            assert!((got - expected).abs() < 1e-9, "{} vs {}", got, expected);
        }
    }

    #[test]
    fn test_fitted_scaling_is_used_for_inverse() {
        let series = PriceSeries::daily(start(), &[50.0, 50.0, 50.0]).unwrap();
        let context = ScalingContext { min: 0.0, max: 100.0 };
        let service = ForecastService::new(
            Arc::new(LinearExtrapolator),
            ScalingSource::Fitted(context),
            3,
        );

        let prices = service.forecast(&series, 2).unwrap().prices();
        assert_eq!(prices.len(), 2);
        for p in prices {
            assert!((p - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_forecast_error_cases() {
        let series = PriceSeries::daily(start(), &[1.0, 2.0]).unwrap();
        let service =
            ForecastService::new(Arc::new(LinearExtrapolator), ScalingSource::PerSeries, 3);

        assert_eq!(service.forecast(&series, 0), Err(ForecastError::InvalidHorizon));
        assert_eq!(
            service.forecast(&series, 5),
            Err(ForecastError::InsufficientHistory { len: 2, window: 3 })
        );

        let empty = PriceSeries::new(vec![]).unwrap();
        assert_eq!(service.forecast(&empty, 5), Err(ForecastError::EmptySeries));

        let unavailable = ForecastService::unavailable(3);
        assert!(!unavailable.is_available());
        for horizon in [0, 5] {
            assert!(matches!(
                unavailable.forecast(&series, horizon),
                Err(ForecastError::ModelUnavailable { .. })
            ));
        }
    }

    struct NanPredictor;

    impl WindowPredictor for NanPredictor {
        fn predict_one(&self, _window: &[f64]) -> Result<f64, ForecastError> {
            Ok(f64::NAN)
        }

        fn name(&self) -> &str {
            "nan"
        }
    }

    #[test]
    fn test_non_finite_model_output_is_an_error() {
        let series = PriceSeries::daily(start(), &[1.0, 2.0, 3.0]).unwrap();
        let service = ForecastService::new(Arc::new(NanPredictor), ScalingSource::PerSeries, 3);

        assert!(matches!(
            service.forecast(&series, 3),
            Err(ForecastError::PredictionFailed { .. })
        ));
    }
}
