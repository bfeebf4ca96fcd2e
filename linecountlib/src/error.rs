//! Error types for linecountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting lines
#[derive(Error, Debug)]
pub enum LineCountError {
    /// The input file could not be opened (missing, no permission, not a file)
    #[error("Error in opening file '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading failed after the file was opened
    #[error("failed to read file '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error from a reader with no associated path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LineCountError {
    /// Attach a path to a bare reader error.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LineCountError::Io(source) => LineCountError::ReadFailure {
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    /// Whether the input could not be opened at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LineCountError::Unavailable { .. })
    }
}
