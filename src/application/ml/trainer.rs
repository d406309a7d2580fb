use super::artifact::ModelArtifact;
use super::predictor::WindowPredictor;
use super::smartcore_predictor::{ForestParams, ForestWindowPredictor};
use crate::application::forecasting::scaler;
use crate::application::forecasting::windowed::{TrainingPairs, prepare_training_pairs};
use crate::domain::errors::ForecastError;
use crate::domain::market::PriceSeries;
use chrono::Utc;
use tracing::info;

/// Outcome of a training run
pub struct TrainedModel {
    pub artifact: ModelArtifact,
    pub samples: usize,
    pub in_sample_rmse: f64,
}

/// Fit scaler, build windows and fit the forest on the full close series.
pub fn train_forest(
    series: &PriceSeries,
    window_size: usize,
    params: &ForestParams,
) -> Result<TrainedModel, ForecastError> {
    if window_size == 0 {
        return Err(ForecastError::InvalidWindow);
    }
    let scaling = scaler::fit(series.closes())?;
    let normalized = scaler::transform(series.closes(), &scaling);
    let pairs = prepare_training_pairs(&normalized, window_size)?;

    info!(
        "Training random forest on {} windows (window {}, trees {}, depth {}, min split {})",
        pairs.len(),
        window_size,
        params.n_trees,
        params.max_depth,
        params.min_split
    );

    let predictor = ForestWindowPredictor::fit(&pairs, params)?;
    let in_sample_rmse = rmse(&predictor, &pairs)?;
    info!("In-sample RMSE (normalised): {:.6}", in_sample_rmse);

    Ok(TrainedModel {
        samples: pairs.len(),
        in_sample_rmse,
        artifact: ModelArtifact {
            window_size,
            scaling,
            observations: series.len(),
            trained_at: Utc::now(),
            predictor,
        },
    })
}

/// Root mean squared one-step error over the given pairs
pub fn rmse(predictor: &dyn WindowPredictor, pairs: &TrainingPairs) -> Result<f64, ForecastError> {
    if pairs.is_empty() {
        return Ok(0.0);
    }

    let mut sq_err = 0.0;
    for (input, target) in pairs.inputs.iter().zip(pairs.targets.iter()) {
        let pred = predictor.predict_one(input)?;
        sq_err += (pred - target).powi(2);
    }
    Ok((sq_err / pairs.len() as f64).sqrt())
}
