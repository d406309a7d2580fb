//! Print a Buy/Hold/Sell recommendation for one asset as JSON.
//!
//! # Usage
//! ```sh
//! cargo run --bin advise -- --input data/AAPL.csv --headlines news.txt
//! cargo run --bin advise -- --input data/BTC-USD.csv --sentiment -0.3 --rsi 75
//! ```
//!
//! Without a trained model (see the `train` binary) the last closes stand in
//! for the forecast. RSI is computed from the closes unless `--rsi` is given.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;
use trendsage::application::advisor::Advisor;
use trendsage::application::forecasting::service::ForecastService;
use trendsage::config::Config;
use trendsage::infrastructure::RsiCalculator;
use trendsage::infrastructure::csv_loader::load_price_series;
use trendsage::infrastructure::model_store::load_artifact;
use trendsage::infrastructure::news::{SentimentAnalyzer, summarize};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to daily OHLCV CSV
    #[arg(long)]
    input: PathBuf,

    /// Trained model file (defaults to FORECAST_MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Days to forecast (defaults to FORECAST_HORIZON)
    #[arg(long)]
    horizon: Option<usize>,

    /// Compound sentiment score between -1 and 1
    #[arg(long, allow_negative_numbers = true, conflicts_with = "headlines")]
    sentiment: Option<f64>,

    /// File with one headline per line, scored with VADER
    #[arg(long)]
    headlines: Option<PathBuf>,

    /// RSI value overriding the one computed from closes
    #[arg(long)]
    rsi: Option<f64>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let horizon = args.horizon.unwrap_or(config.horizon);

    let series = load_price_series(&args.input)?;

    let model_path = args.model.clone().unwrap_or_else(|| config.model_path.clone());
    let forecasts = match load_artifact(&model_path) {
        Ok(artifact) => ForecastService::from_artifact(artifact),
        Err(e) => {
            warn!("{}", e);
            ForecastService::unavailable(config.window_size)
        }
    };

    let (sentiment_score, sentiment_summary) = match &args.headlines {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read headlines {:?}", path))?;
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            let analyzer = SentimentAnalyzer::new();
            let summary = summarize(&analyzer.score_texts(&lines));
            info!(
                "Scored {} headlines: {} positive, {} neutral, {} negative",
                summary.total, summary.positive, summary.neutral, summary.negative
            );
            (summary.average, Some(summary))
        }
        None => (args.sentiment.unwrap_or(0.0), None),
    };

    let rsi = match args.rsi {
        Some(rsi) => Some(rsi),
        None => RsiCalculator::new(config.rsi_period)?.latest(series.closes()),
    };

    let advisor = Advisor::from_config(&config, forecasts);
    let advice = advisor.advise(&series, horizon, sentiment_score, rsi)?;

    let output = json!({
        "input": args.input,
        "sentiment_score": sentiment_score,
        "sentiment_summary": sentiment_summary,
        "rsi_value": rsi,
        "forecast": advice.forecast,
        "recommendation": advice.recommendation,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
