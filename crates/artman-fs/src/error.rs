//! Error types for artman-fs

use std::path::PathBuf;

/// Result type for artman-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in artman-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Cannot expand `~` in {path}: home directory is unavailable")]
    HomeDirUnavailable { path: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the document failing to deserialize.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ConfigParse { .. })
    }
}
