use crate::application::ml::smartcore_predictor::ForestParams;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub window_size: usize,
    pub horizon: usize,
    pub model_path: PathBuf,
    pub rsi_period: usize,
    pub pseudo_forecast_len: usize, // closes used when no forecast exists
    pub default_rsi: f64,
    // Random forest
    pub forest_n_trees: usize,
    pub forest_max_depth: u16,
    pub forest_min_split: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: 30,
            horizon: 30,
            model_path: PathBuf::from("data/ml/forecast_model.json"),
            rsi_period: 14,
            pseudo_forecast_len: 30,
            default_rsi: 50.0,
            forest_n_trees: 100,
            forest_max_depth: 10,
            forest_min_split: 5,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let window_size = env::var("FORECAST_WINDOW_SIZE")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<usize>()
            .context("Failed to parse FORECAST_WINDOW_SIZE")?;
        if window_size == 0 {
            anyhow::bail!("FORECAST_WINDOW_SIZE must be greater than 0");
        }

        let horizon = env::var("FORECAST_HORIZON")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<usize>()
            .context("Failed to parse FORECAST_HORIZON")?;
        if horizon == 0 {
            anyhow::bail!("FORECAST_HORIZON must be greater than 0");
        }

        let model_path = PathBuf::from(
            env::var("FORECAST_MODEL_PATH")
                .unwrap_or_else(|_| "data/ml/forecast_model.json".to_string()),
        );

        let rsi_period = env::var("RSI_PERIOD")
            .unwrap_or_else(|_| "14".to_string())
            .parse::<usize>()
            .context("Failed to parse RSI_PERIOD")?;
        if rsi_period == 0 {
            anyhow::bail!("RSI_PERIOD must be greater than 0");
        }

        let pseudo_forecast_len = env::var("PSEUDO_FORECAST_LEN")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<usize>()
            .context("Failed to parse PSEUDO_FORECAST_LEN")?;

        let default_rsi = env::var("DEFAULT_RSI")
            .unwrap_or_else(|_| "50.0".to_string())
            .parse::<f64>()
            .context("Failed to parse DEFAULT_RSI")?;

        let forest_n_trees = env::var("FOREST_N_TREES")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<usize>()
            .context("Failed to parse FOREST_N_TREES")?;
        if forest_n_trees == 0 {
            anyhow::bail!("FOREST_N_TREES must be greater than 0");
        }

        let forest_max_depth = env::var("FOREST_MAX_DEPTH")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u16>()
            .context("Failed to parse FOREST_MAX_DEPTH")?;

        let forest_min_split = env::var("FOREST_MIN_SPLIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .context("Failed to parse FOREST_MIN_SPLIT")?;

        Ok(Config {
            window_size,
            horizon,
            model_path,
            rsi_period,
            pseudo_forecast_len,
            default_rsi,
            forest_n_trees,
            forest_max_depth,
            forest_min_split,
        })
    }

    pub fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_trees: self.forest_n_trees,
            max_depth: self.forest_max_depth,
            min_split: self.forest_min_split,
        }
    }
}
