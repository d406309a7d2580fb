use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Min/max pair captured when the scaler is fitted.
///
/// Persisted with the trained predictor; every trajectory is inverse-transformed
/// with the context fitted on the series that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingContext {
    pub min: f64,
    pub max: f64,
}

impl ScalingContext {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Constant series: every value scales to 0.0 and back to `min`.
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Predicted prices at a daily cadence, step 1 being the day after the last observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastTrajectory {
    points: Vec<ForecastPoint>,
}

impl ForecastTrajectory {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }
}
