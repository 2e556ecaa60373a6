//! Core error types for procrastiscope-core.
//!
//! Scoring itself never fails: malformed dates and missing model artifacts
//! are recovered where they occur. What remains are the failures of the
//! surrounding plumbing (configuration, payload decoding, disk access),
//! which the boundary reports as a generic failure with this message.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for procrastiscope-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model artifact errors
    #[error("Model artifact error: {0}")]
    Model(#[from] ModelError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors reading or writing the placeholder model artifacts.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be read or decoded
    #[error("Failed to read model artifact {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Artifact file could not be written
    #[error("Failed to write model artifact {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty payload where a document was expected
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
