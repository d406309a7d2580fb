//! Sliding-window sequence forecasting.
//!
//! Training pairs are built from a normalised series, and forecasts are
//! produced by an autoregressive rollout: each prediction is pushed into the
//! input window (evicting the oldest value) before the next step. Future
//! ground truth is unknown at forecast time, so errors compound forward.

use crate::application::ml::predictor::WindowPredictor;
use crate::domain::errors::ForecastError;
use std::collections::VecDeque;
use tracing::debug;

/// Supervised pairs: `inputs[k]` is the window preceding `targets[k]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingPairs {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl TrainingPairs {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// One iteration of the rollout, kept for inspection
#[derive(Debug, Clone, PartialEq)]
pub struct RolloutStep {
    pub step: usize,
    pub window: Vec<f64>,
    pub prediction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedForecaster {
    window_size: usize,
}

impl WindowedForecaster {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn prepare_training_pairs(
        &self,
        normalized: &[f64],
    ) -> Result<TrainingPairs, ForecastError> {
        prepare_training_pairs(normalized, self.window_size)
    }

    /// Forecast `horizon` normalised values from the most recent `window_size`
    /// observations.
    pub fn predict(
        &self,
        model: Option<&dyn WindowPredictor>,
        seed_window: &[f64],
        horizon: usize,
    ) -> Result<Vec<f64>, ForecastError> {
        self.rollout(model, seed_window, horizon, |_, _, _| {})
    }

    /// Same as [`predict`](Self::predict) but records the input window and
    /// output of every step.
    pub fn predict_traced(
        &self,
        model: Option<&dyn WindowPredictor>,
        seed_window: &[f64],
        horizon: usize,
    ) -> Result<Vec<RolloutStep>, ForecastError> {
        let mut trace = Vec::with_capacity(horizon);
        self.rollout(model, seed_window, horizon, |step, window, prediction| {
            trace.push(RolloutStep {
                step,
                window: window.to_vec(),
                prediction,
            });
        })?;
        Ok(trace)
    }

    fn rollout<F>(
        &self,
        model: Option<&dyn WindowPredictor>,
        seed_window: &[f64],
        horizon: usize,
        mut on_step: F,
    ) -> Result<Vec<f64>, ForecastError>
    where
        F: FnMut(usize, &[f64], f64),
    {
        let model = model.ok_or_else(|| ForecastError::ModelUnavailable {
            reason: "no trained predictor supplied".to_string(),
        })?;

        if seed_window.len() != self.window_size {
            return Err(ForecastError::DimensionMismatch {
                expected: self.window_size,
                actual: seed_window.len(),
            });
        }

        debug!(
            "Rolling out {} steps with {} (window {})",
            horizon,
            model.name(),
            self.window_size
        );

        let mut window: VecDeque<f64> = VecDeque::with_capacity(self.window_size + 1);
        window.extend(seed_window.iter().copied());
        let mut outputs = Vec::with_capacity(horizon);

        for step in 0..horizon {
            let input = window.make_contiguous();
            let next = model.predict_one(input)?;
            if !next.is_finite() {
                return Err(ForecastError::PredictionFailed {
                    reason: format!("{} returned {} at step {}", model.name(), next, step),
                });
            }
            on_step(step, input, next);
            outputs.push(next);

            window.push_back(next);
            if window.len() > self.window_size {
                window.pop_front();
            }
        }

        Ok(outputs)
    }
}

pub fn prepare_training_pairs(
    normalized: &[f64],
    window_size: usize,
) -> Result<TrainingPairs, ForecastError> {
    if normalized.len() <= window_size {
        return Err(ForecastError::InsufficientHistory {
            len: normalized.len(),
            window: window_size,
        });
    }

    let mut pairs = TrainingPairs::default();
    for i in window_size..normalized.len() {
        pairs.inputs.push(normalized[i - window_size..i].to_vec());
        pairs.targets.push(normalized[i]);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::linear_predictor::LinearExtrapolator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns the step counter so each prediction is distinguishable
    struct CountingPredictor {
        calls: AtomicUsize,
    }

    impl WindowPredictor for CountingPredictor {
        fn predict_one(&self, _window: &[f64]) -> Result<f64, ForecastError> {
            Ok(self.calls.fetch_add(1, Ordering::SeqCst) as f64 + 100.0)
        }

        fn name(&self) -> &str {
            "counting"
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
    fn test_training_pairs_layout() {
        let series = [0.0, 0.1, 0.2, 0.3, 0.4];
        let pairs = prepare_training_pairs(&series, 3).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.inputs[0], vec![0.0, 0.1, 0.2]);
        assert_eq!(pairs.targets[0], 0.3);
        assert_eq!(pairs.inputs[1], vec![0.1, 0.2, 0.3]);
        assert_eq!(pairs.targets[1], 0.4);
    }

    #[test]
    fn test_training_pairs_need_more_than_window() {
        let err = prepare_training_pairs(&[0.1, 0.2, 0.3], 3).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientHistory { len: 3, window: 3 });
    }

    #[test]
    fn test_predict_without_model_is_unavailable() {
        let forecaster = WindowedForecaster::new(2);
        let err = forecaster.predict(None, &[0.1, 0.2], 3).unwrap_err();
        assert!(matches!(err, ForecastError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_predict_rejects_wrong_seed_length() {
        let forecaster = WindowedForecaster::new(3);
        let err = forecaster
            .predict(Some(&LinearExtrapolator), &[0.1, 0.2], 3)
            .unwrap_err();
        assert_eq!(err, ForecastError::DimensionMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_predict_returns_horizon_values() {
        let forecaster = WindowedForecaster::new(4);
        for horizon in [0, 1, 5, 30] {
            let out = forecaster
                .predict(Some(&LinearExtrapolator), &[1.0, 2.0, 3.0, 4.0], horizon)
                .unwrap();
            assert_eq!(out.len(), horizon);
        }
    }

    #[test]
    fn test_window_slides_with_predictions() {
        let predictor = CountingPredictor {
            calls: AtomicUsize::new(0),
        };
        let forecaster = WindowedForecaster::new(3);
        let trace = forecaster
            .predict_traced(Some(&predictor), &[1.0, 2.0, 3.0], 4)
            .unwrap();

        assert_eq!(trace.len(), 4);
        assert!(trace.iter().all(|s| s.window.len() == 3));
        assert_eq!(trace[0].window, vec![1.0, 2.0, 3.0]);
        assert_eq!(trace[1].window, vec![2.0, 3.0, 100.0]);
        assert_eq!(trace[2].window, vec![3.0, 100.0, 101.0]);
        assert_eq!(trace[3].window, vec![100.0, 101.0, 102.0]);
        assert_eq!(trace[3].prediction, 103.0);
    }

    #[test]
    fn test_non_finite_prediction_fails_rollout() {
        let forecaster = WindowedForecaster::new(2);
        let err = forecaster
            .predict(Some(&NanPredictor), &[0.1, 0.2], 3)
            .unwrap_err();
        assert!(matches!(err, ForecastError::PredictionFailed { .. }));
    }

    #[test]
    fn test_linear_rollout_compounds_predictions() {
        let forecaster = WindowedForecaster::new(3);
        let out = forecaster
            .predict(Some(&LinearExtrapolator), &[1.0, 2.0, 3.0], 3)
            .unwrap();
        assert_eq!(out, vec![4.0, 5.0, 6.0]);
    }
}
