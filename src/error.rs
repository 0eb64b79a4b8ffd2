//! Error types for Evoplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Evoplot operations.
pub type Result<T> = std::result::Result<T, EvoplotError>;

/// Errors that can occur in Evoplot.
#[derive(Debug, Error)]
pub enum EvoplotError {
    /// Failed to open the score file.
    #[error("Failed to open score file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A line carried no fields at all.
    #[error("line {line}: no score field")]
    MissingScore {
        /// 1-based line number in the score file.
        line: usize,
    },

    /// The last field of a line is not a valid integer.
    #[error("line {line}: invalid score {token:?}")]
    InvalidScore {
        /// 1-based line number in the score file.
        line: usize,
        /// The offending field.
        token: String,
        /// Underlying parse error.
        #[source]
        source: ParseIntError,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvoplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a MissingScore error.
    pub fn missing_score(line: usize) -> Self {
        Self::MissingScore { line }
    }

    /// Create an InvalidScore error.
    pub fn invalid_score(line: usize, token: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidScore {
            line,
            token: token.into(),
            source,
        }
    }
}
