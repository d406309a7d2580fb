use crate::config::Config;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 9] = [
    "FORECAST_WINDOW_SIZE",
    "FORECAST_HORIZON",
    "FORECAST_MODEL_PATH",
    "RSI_PERIOD",
    "PSEUDO_FORECAST_LEN",
    "DEFAULT_RSI",
    "FOREST_N_TREES",
    "FOREST_MAX_DEPTH",
    "FOREST_MIN_SPLIT",
];

fn clear_vars() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    let config = Config::from_env().unwrap();
    assert_eq!(config.window_size, 30);
    assert_eq!(config.horizon, 30);
    assert_eq!(
        config.model_path,
        std::path::PathBuf::from("data/ml/forecast_model.json")
    );
    assert_eq!(config.rsi_period, 14);
    assert_eq!(config.pseudo_forecast_len, 30);
    assert!((config.default_rsi - 50.0).abs() < f64::EPSILON);

    let params = config.forest_params();
    assert_eq!(params.n_trees, 100);
    assert_eq!(params.max_depth, 10);
    assert_eq!(params.min_split, 5);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    unsafe {
        env::set_var("FORECAST_WINDOW_SIZE", "10");
        env::set_var("FORECAST_HORIZON", "5");
        env::set_var("FOREST_MAX_DEPTH", "6");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.window_size, 10);
    assert_eq!(config.horizon, 5);
    assert_eq!(config.forest_max_depth, 6);

    // Cleanup
    clear_vars();
}

#[test]
fn test_config_rejects_invalid_values() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    unsafe { env::set_var("FORECAST_WINDOW_SIZE", "0") };
    assert!(Config::from_env().is_err());

    unsafe { env::set_var("FORECAST_WINDOW_SIZE", "thirty") };
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("FORECAST_WINDOW_SIZE"));

    clear_vars();
    unsafe { env::set_var("FOREST_N_TREES", "0") };
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("FOREST_N_TREES"));

    clear_vars();
}
