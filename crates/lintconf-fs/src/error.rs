//! Error types for lintconf-fs

use std::path::PathBuf;

/// Result type for lintconf-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or writing configuration layers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize config as {format}: {message}")]
    ConfigSerialize { format: String, message: String },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid configuration document at {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
