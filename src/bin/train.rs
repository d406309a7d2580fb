//! Fit the window forecaster on a daily price CSV and save the model.
//!
//! # Usage
//! ```sh
//! cargo run --bin train -- --input data/AAPL.csv --output data/ml/forecast_model.json
//! ```
//!
//! Defaults come from the environment (`FORECAST_WINDOW_SIZE`,
//! `FORECAST_MODEL_PATH`, `FOREST_*`); flags override them.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use trendsage::application::ml::trainer::train_forest;
use trendsage::config::Config;
use trendsage::infrastructure::csv_loader::load_price_series;
use trendsage::infrastructure::model_store::save_artifact;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to daily OHLCV CSV
    #[arg(long)]
    input: PathBuf,

    /// Path to output model file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of trailing observations per prediction step
    #[arg(long)]
    window: Option<usize>,

    /// Number of trees in the random forest
    #[arg(long)]
    n_trees: Option<usize>,

    /// Maximum depth of trees
    #[arg(long)]
    max_depth: Option<u16>,

    /// Minimum samples required to split an internal node
    #[arg(long)]
    min_split: Option<usize>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let window_size = args.window.unwrap_or(config.window_size);
    if window_size == 0 {
        anyhow::bail!("--window must be greater than 0");
    }
    let mut params = config.forest_params();
    if let Some(n_trees) = args.n_trees {
        if n_trees == 0 {
            anyhow::bail!("--n-trees must be greater than 0");
        }
        params.n_trees = n_trees;
    }
    if let Some(max_depth) = args.max_depth {
        params.max_depth = max_depth;
    }
    if let Some(min_split) = args.min_split {
        params.min_split = min_split;
    }
    let output = args.output.unwrap_or_else(|| config.model_path.clone());

    info!("Loading training data from {:?}", args.input);
    let series = load_price_series(&args.input)?;

    let trained = train_forest(&series, window_size, &params)
        .with_context(|| format!("Training failed for {:?}", args.input))?;

    save_artifact(&output, &trained.artifact)?;
    info!(
        "Done. Trained on {} windows (in-sample RMSE {:.6}), model saved to {:?}",
        trained.samples, trained.in_sample_rmse, output
    );
    Ok(())
}
