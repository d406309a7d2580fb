use super::smartcore_predictor::ForestWindowPredictor;
use crate::domain::forecast::ScalingContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trained predictor and the scaling context it was fitted with.
///
/// Both travel in one document so a forecast can never pair a model with a
/// context fitted on a different series.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub window_size: usize,
    pub scaling: ScalingContext,
    pub observations: usize,
    pub trained_at: DateTime<Utc>,
    pub predictor: ForestWindowPredictor,
}
