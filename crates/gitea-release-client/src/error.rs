//! Error types for gitea-release-client

use thiserror::Error;

/// Result type alias using gitea-release-client's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the release API client and the reconciliation engine
#[derive(Error, Debug)]
pub enum Error {
    /// The remote API answered with a non-success status
    #[error("{operation} failed with status {status}: {message}")]
    Api {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An attachment with this name already exists (fail policy)
    #[error("asset file already exists: {name}")]
    AssetExists { name: String },

    /// A local artifact could not be read
    #[error("failed to read {path} artifact: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Create an API error for the given operation
    pub fn api(operation: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            status,
            message: message.into(),
        }
    }

    /// Create an asset conflict error
    pub fn asset_exists(name: impl Into<String>) -> Self {
        Self::AssetExists { name: name.into() }
    }

    /// Create a read file error carrying the offending path
    pub fn read_file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an asset name conflict rather than a transport failure
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AssetExists { .. })
    }
}
