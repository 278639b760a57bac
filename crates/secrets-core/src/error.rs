//! Error types for secrets-core

use std::path::PathBuf;

/// Result type for secrets-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in secrets-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The flat secrets file to restore from does not exist
    #[error("{} not found", .path.display())]
    SecretsFileNotFound { path: PathBuf },

    /// A configuration file is not valid JSON
    #[error("Failed to parse JSON config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A restore target crosses a value that is not a JSON object
    #[error("Cannot set {path}: segment '{segment}' is not an object")]
    PathConflict { path: String, segment: String },

    /// Filesystem error from secrets-fs
    #[error(transparent)]
    Fs(#[from] secrets_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
