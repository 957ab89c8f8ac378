//! Error types for the composition engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for composer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or driving the composer.
///
/// Composing a document never fails: every request-level anomaly resolves to
/// a default. These variants cover startup and the CLI boundary only.
#[derive(Error, Debug)]
pub enum Error {
    /// A font asset is missing or unreadable
    #[error("Failed to load font asset {}: {source}", path.display())]
    FontAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A request document could not be interpreted
    #[error("Invalid request: {0}")]
    RequestError(String),

    /// I/O error outside of font loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Request JSON could not be decoded
    #[error("Request JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
