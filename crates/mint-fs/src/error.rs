//! Error types for mint-fs

use std::path::PathBuf;

/// Result type for mint-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document not found: {path}")]
    NotFound { path: String },

    #[error("Failed to parse JSON document at {path}: {message}")]
    Parse { path: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the document was simply absent (as opposed to unreadable or malformed).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
