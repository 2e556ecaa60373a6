//! Placeholder regression model artifacts.
//!
//! Two untrained regressor descriptions are kept on disk next to the
//! configuration: one for task risk and one for the aggregate score. No
//! scoring path reads them; they reserve the slot a fitted model will take.
//! Missing or unreadable files are replaced with fresh untrained specs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ModelError;

pub const TASK_RISK_MODEL_FILE: &str = "task_risk_model.json";
pub const PROCRASTINATION_SCORE_MODEL_FILE: &str = "procrastination_score_model.json";

/// Hyperparameters of a regression model, and whether it was ever fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressorSpec {
    pub estimator: String,
    pub n_estimators: u32,
    pub random_state: u64,
    #[serde(default)]
    pub fitted: bool,
}

impl RegressorSpec {
    /// Random forest with default hyperparameters, never fitted.
    pub fn untrained() -> Self {
        Self {
            estimator: "random_forest_regressor".to_string(),
            n_estimators: 100,
            random_state: 42,
            fitted: false,
        }
    }
}

/// Where the artifacts came from at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactSource {
    Loaded,
    Created,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub task_risk: RegressorSpec,
    pub procrastination_score: RegressorSpec,
    pub source: ArtifactSource,
}

impl ModelArtifacts {
    pub fn untrained() -> Self {
        Self {
            task_risk: RegressorSpec::untrained(),
            procrastination_score: RegressorSpec::untrained(),
            source: ArtifactSource::Created,
        }
    }

    /// Load both artifacts from `dir`, falling back to untrained specs.
    ///
    /// With `persist`, fresh specs are written back; a failed write is
    /// logged and otherwise ignored.
    pub fn load_or_create(dir: &Path, persist: bool) -> Self {
        match Self::load(dir) {
            Ok(artifacts) => {
                tracing::debug!(dir = %dir.display(), "model artifacts loaded");
                artifacts
            }
            Err(err) => {
                tracing::debug!(error = %err, "creating untrained model artifacts");
                let artifacts = Self::untrained();
                if persist {
                    if let Err(err) = artifacts.save(dir) {
                        tracing::warn!(error = %err, "could not persist model artifacts");
                    }
                }
                artifacts
            }
        }
    }

    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        Ok(Self {
            task_risk: read_spec(&dir.join(TASK_RISK_MODEL_FILE))?,
            procrastination_score: read_spec(&dir.join(PROCRASTINATION_SCORE_MODEL_FILE))?,
            source: ArtifactSource::Loaded,
        })
    }

    pub fn save(&self, dir: &Path) -> Result<(), ModelError> {
        std::fs::create_dir_all(dir).map_err(|e| ModelError::WriteFailed {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        write_spec(&dir.join(TASK_RISK_MODEL_FILE), &self.task_risk)?;
        write_spec(&dir.join(PROCRASTINATION_SCORE_MODEL_FILE), &self.procrastination_score)
    }

    /// True once either model has been fitted. Always false today.
    pub fn any_fitted(&self) -> bool {
        self.task_risk.fitted || self.procrastination_score.fitted
    }
}

fn read_spec(path: &Path) -> Result<RegressorSpec, ModelError> {
    let read_failed = |message: String| ModelError::ReadFailed {
        path: PathBuf::from(path),
        message,
    };
    let content = std::fs::read_to_string(path).map_err(|e| read_failed(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| read_failed(e.to_string()))
}

fn write_spec(path: &Path, spec: &RegressorSpec) -> Result<(), ModelError> {
    let write_failed = |message: String| ModelError::WriteFailed {
        path: PathBuf::from(path),
        message,
    };
    let content = serde_json::to_string_pretty(spec).map_err(|e| write_failed(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| write_failed(e.to_string()))
}
