pub mod csv_loader;
pub mod indicators;
pub mod model_store;
pub mod news;

pub use indicators::RsiCalculator;
