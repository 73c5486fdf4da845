//! Error handling for the PFT interpreter.
//!
//! The interpretation engine itself never fails: incomplete panels degrade to
//! "no finding". These errors belong to the outer surface that loads record
//! files and decodes them.

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for the PFT interpreter
#[derive(Debug, thiserror::Error)]
pub enum PftError {
    /// Error opening or reading a record file
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error decoding a JSON measurement record
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input that cannot be interpreted as a measurement record at all
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PftError {
    /// Wrap an IO error with the path that produced it
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for PFT interpreter operations
pub type Result<T> = std::result::Result<T, PftError>;
