mod config;
pub mod models;

pub use config::{Config, LoggingConfig, ModelsConfig, OutputConfig};
pub use models::{ArtifactSource, ModelArtifacts, RegressorSpec};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/procrastiscope[-dev]/` based on PROCRASTISCOPE_ENV.
///
/// Set PROCRASTISCOPE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PROCRASTISCOPE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("procrastiscope-dev")
    } else {
        base_dir.join("procrastiscope")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
