use crate::application::ml::artifact::ModelArtifact;
use crate::domain::errors::ForecastError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{error, info, warn};

/// Writes the artifact as JSON, creating parent directories as needed.
pub fn save_artifact(path: &Path, artifact: &ModelArtifact) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create model directory {:?}", parent))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create model file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, artifact)
        .with_context(|| format!("Failed to serialize model to {:?}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write model file {:?}", path))?;

    info!("Saved forecast model to {:?}", path);
    Ok(())
}

/// Loads a trained artifact; any failure means the model is unavailable.
pub fn load_artifact(path: &Path) -> Result<ModelArtifact, ForecastError> {
    if !path.exists() {
        warn!("Forecast model file not found at {:?}", path);
        return Err(ForecastError::ModelUnavailable {
            reason: format!("no model file at {:?}", path),
        });
    }

    let file = File::open(path).map_err(|e| {
        error!("Failed to open model file: {}", e);
        ForecastError::ModelUnavailable {
            reason: format!("cannot open {:?}: {}", path, e),
        }
    })?;

    let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        error!("Failed to deserialize forecast model: {}", e);
        ForecastError::ModelUnavailable {
            reason: format!("corrupt model file {:?}: {}", path, e),
        }
    })?;

    info!("Successfully loaded forecast model from {:?}", path);
    Ok(artifact)
}
