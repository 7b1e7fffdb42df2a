//! Error types for gitea-release-core

use thiserror::Error;

/// Result type alias using gitea-release-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for gitea-release
#[derive(Error, Debug)]
pub enum Error {
    /// Pipeline event is not a tag push
    #[error("event not supported: {event}")]
    UnsupportedEvent { event: String },

    /// Conflict policy value outside overwrite/fail/skip
    #[error("invalid file_exist value: {value}")]
    InvalidConflictPolicy { value: String },

    /// Base URL did not parse
    #[error("failed to parse base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Unknown checksum method requested
    #[error("hash method not supported: {method}")]
    UnsupportedChecksum { method: String },

    /// Malformed glob pattern
    #[error("failed to glob {pattern}: {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },

    /// Local file could not be read
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported event error
    pub fn unsupported_event(event: impl Into<String>) -> Self {
        Self::UnsupportedEvent {
            event: event.into(),
        }
    }

    /// Create an invalid conflict policy error
    pub fn invalid_conflict_policy(value: impl Into<String>) -> Self {
        Self::InvalidConflictPolicy {
            value: value.into(),
        }
    }

    /// Create an unsupported checksum method error
    pub fn unsupported_checksum(method: impl Into<String>) -> Self {
        Self::UnsupportedChecksum {
            method: method.into(),
        }
    }

    /// Create a read file error carrying the offending path
    pub fn read_file(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
