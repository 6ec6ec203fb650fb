//! Error types for index generation.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while resolving config, walking the docs tree,
/// or writing the README.
#[derive(Error, Debug)]
pub enum DocIndexError {
    /// Filesystem failure below the docs root or on the README itself
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but could not be parsed
    #[error("invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Docs directory does not sit below the repository root
    #[error("invalid docs path `{docs}`: must be relative to the repository root without `..`")]
    InvalidDocsPath { docs: String },

    /// Exclude pattern is not a valid glob
    #[error("invalid exclude pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl DocIndexError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocIndexError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DocIndexError>;
