// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-policy.
//!
//! The policy itself cannot fail; these errors come from loading tool
//! configuration, locating the repository, and writing exports.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-policy operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for PolicyError {
    fn from(err: dialoguer::Error) -> Self {
        PolicyError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Export-related errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize policy as {format}: {message}")]
    SerializeFailed { format: String, message: String },

    #[error("File already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to write '{path}': {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Result type alias for commit-policy operations.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PolicyError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_export_error_mentions_force() {
        let err = ExportError::AlreadyExists {
            path: PathBuf::from("commitlint.config.js"),
        };
        assert!(err.to_string().contains("commitlint.config.js"));
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    fn test_policy_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.type-enum".to_string(),
            message: "empty".to_string(),
        };
        let err: PolicyError = config_err.into();
        assert!(err.to_string().contains("rules.type-enum"));
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk full",
        ));
        let err = io.context("writing export").unwrap_err();
        assert_eq!(err.to_string(), "writing export: disk full");
    }
}
