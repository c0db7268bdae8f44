//! Error types for multideployer
//!
//! Library code returns `MultideployerError`; the binary converts every
//! variant into exit code 1.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigFormatError;
use crate::domain::ports::DeploymentError;

/// Result type alias for multideployer operations
pub type MultideployerResult<T> = Result<T, MultideployerError>;

/// Main error type for a deploy run
#[derive(Error, Debug)]
pub enum MultideployerError {
    /// Configuration file does not exist
    #[error("file {path} not found")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but is malformed or schema-invalid
    #[error("file {path} not in expected format")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: ConfigFormatError,
    },

    /// Invoking principal lacks administrative privileges
    #[error("permission denied: {reason}")]
    Permission { reason: String },

    /// Source URI scheme is not a known hosting provider
    #[error("unsupported source '{source_uri}': scheme '{scheme}' is not supported")]
    UnsupportedSource { source_uri: String, scheme: String },

    /// Source URI could not be parsed
    #[error("invalid source '{source_uri}': {message}")]
    InvalidSource { source_uri: String, message: String },

    /// Filesystem failure with context
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Bundle download failed
    #[error("download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// Bundle archive could not be read or extracted
    #[error("cannot extract archive {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Per-app destination directory already exists
    #[error("destination {path} already exists")]
    DestinationExists { path: PathBuf },

    /// State file exists but cannot be parsed
    #[error("invalid state file {path}: {message}")]
    State { path: PathBuf, message: String },

    /// Deployment agent reported or caused a failure
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
}

impl MultideployerError {
    /// Wrap an I/O error with a short description of what was attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MultideployerError::Io {
            context: context.into(),
            source,
        }
    }
}
