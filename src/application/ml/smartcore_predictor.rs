use super::predictor::WindowPredictor;
use crate::application::forecasting::windowed::TrainingPairs;
use crate::domain::errors::ForecastError;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

pub type WindowForest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: u16,
    pub min_split: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 10,
            min_split: 5,
        }
    }
}

/// Random forest regressor mapping a normalised window to the next value
#[derive(Serialize, Deserialize)]
pub struct ForestWindowPredictor {
    window_size: usize,
    model: WindowForest,
}

impl ForestWindowPredictor {
    pub fn fit(pairs: &TrainingPairs, params: &ForestParams) -> Result<Self, ForecastError> {
        if params.n_trees == 0 {
            return Err(ForecastError::PredictionFailed {
                reason: "random forest needs at least one tree".to_string(),
            });
        }

        let window_size = match pairs.inputs.first() {
            Some(first) => first.len(),
            None => return Err(ForecastError::EmptySeries),
        };

        let x = DenseMatrix::from_2d_vec(&pairs.inputs).map_err(|e| {
            ForecastError::PredictionFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let forest_params = RandomForestRegressorParameters::default()
            .with_n_trees(params.n_trees)
            .with_max_depth(params.max_depth)
            .with_min_samples_split(params.min_split);

        let model = RandomForestRegressor::fit(&x, &pairs.targets, forest_params).map_err(|e| {
            ForecastError::PredictionFailed {
                reason: format!("Training failed: {}", e),
            }
        })?;

        Ok(Self { window_size, model })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl WindowPredictor for ForestWindowPredictor {
    fn predict_one(&self, window: &[f64]) -> Result<f64, ForecastError> {
        if window.len() != self.window_size {
            return Err(ForecastError::DimensionMismatch {
                expected: self.window_size,
                actual: window.len(),
            });
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![window.to_vec()]).map_err(|e| {
            ForecastError::PredictionFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        match self.model.predict(&input_matrix) {
            Ok(predictions) => predictions
                .first()
                .copied()
                .ok_or_else(|| ForecastError::PredictionFailed {
                    reason: "No prediction returned".to_string(),
                }),
            Err(e) => Err(ForecastError::PredictionFailed {
                reason: format!("Prediction failed: {}", e),
            }),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
