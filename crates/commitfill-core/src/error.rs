//! Core error types for commitfill-core.
//!
//! Every error here is fatal for a backfill run: nothing is retried, and
//! whatever was already written (log entries, artifacts, commits) stays.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for commitfill-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed date bounds or configuration values, detected before any mutation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The activity log exists but its insertion marker is missing
    #[error("Malformed activity log at {}: could not find the end of the entry array", path.display())]
    MalformedStore { path: PathBuf },

    /// The version control collaborator failed to record a commit
    #[error("Commit failed ({command}): {message}")]
    Commit { command: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_store_names_the_file() {
        let err = CoreError::MalformedStore {
            path: PathBuf::from("src/activity-log.ts"),
        };
        assert!(err.to_string().contains("src/activity-log.ts"));
    }

    #[test]
    fn config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::InvalidValue {
            key: "max_commits_per_day".into(),
            message: "must be positive".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("max_commits_per_day"));
    }
}
