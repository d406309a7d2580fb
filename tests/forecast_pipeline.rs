use chrono::NaiveDate;
use std::io::Write;

use trendsage::application::forecasting::scaler;
use trendsage::application::forecasting::service::ForecastService;
use trendsage::application::forecasting::windowed::WindowedForecaster;
use trendsage::application::ml::linear_predictor::LinearExtrapolator;
use trendsage::application::ml::smartcore_predictor::ForestParams;
use trendsage::application::ml::trainer::train_forest;
use trendsage::infrastructure::csv_loader::load_price_series;
use trendsage::infrastructure::model_store::{load_artifact, save_artifact};

fn write_csv(dir: &std::path::Path, days: usize) -> std::path::PathBuf {
    let path = dir.join("prices.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    for i in 0..days {
        let date = start + chrono::Days::new(i as u64);
        let close = 100.0 + 10.0 * ((i as f64) / 5.0).sin();
        writeln!(
            file,
            "{},{:.4},{:.4},{:.4},{:.4},1000",
            date,
            close,
            close + 1.0,
            close - 1.0,
            close
        )
        .unwrap();
    }
    path
}

#[test]
fn test_train_save_load_forecast() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(dir.path(), 120);
    let model_path = dir.path().join("ml").join("forecast_model.json");

    let series = load_price_series(&csv).unwrap();
    assert_eq!(series.len(), 120);

    let params = ForestParams {
        n_trees: 10,
        max_depth: 6,
        min_split: 2,
    };
    let trained = train_forest(&series, 20, &params).unwrap();
    assert_eq!(trained.samples, 100);
    save_artifact(&model_path, &trained.artifact).unwrap();

    let service = ForecastService::from_artifact(load_artifact(&model_path).unwrap());
    assert_eq!(service.window_size(), 20);

    let trajectory = service.forecast(&series, 15).unwrap();
    assert_eq!(trajectory.len(), 15);
    assert_eq!(
        trajectory.first().map(|p| p.date),
        Some(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap())
    );

    // Forest outputs stay within the training targets, so prices stay in the fitted range
    let context = trained.artifact.scaling;
    for price in trajectory.prices() {
        assert!(price >= context.min - 1e-9 && price <= context.max + 1e-9);
    }
}

#[test]
fn test_rollout_keeps_window_size_for_every_step() {
    let closes = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let normalized = scaler::transform(&closes, &scaler::fit(&closes).unwrap());
    let forecaster = WindowedForecaster::new(5);
    let seed = &normalized[normalized.len() - 5..];

    let trace = forecaster
        .predict_traced(Some(&LinearExtrapolator), seed, 12)
        .unwrap();
    assert_eq!(trace.len(), 12);
    for (i, step) in trace.iter().enumerate() {
        assert_eq!(step.step, i);
        assert_eq!(step.window.len(), 5);
        if i > 0 {
            // The newest input is always the previous prediction
            assert_eq!(step.window[4], trace[i - 1].prediction);
            assert_eq!(step.window[..4], trace[i - 1].window[1..]);
        }
    }
}
