//! Error types for facility-fs

use std::path::PathBuf;

/// Result type for facility-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in facility-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract gzip container {path}: {source}")]
    GzipExtract {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compress gzip container {path}: {source}")]
    GzipCompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document {path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },

    #[error("Could not delete pre-existing output file {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Could not clean up temporary file {path} after a failed write")]
    Cleanup { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn extract(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::GzipExtract {
            path: path.into(),
            source,
        }
    }

    pub fn compress(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::GzipCompress {
            path: path.into(),
            source,
        }
    }
}
