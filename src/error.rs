//! Error types for the opendxf library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for opendxf operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// Source or destination file could not be opened
    #[error("unable to open file {}: {source}", .path.display())]
    FileOpen {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// The input violates the tag/value grammar
    #[error("invalid file: line {line}: {message}")]
    InvalidFile {
        /// Physical line number (1-based) where the violation was detected
        line: usize,
        /// Description of the violation
        message: String,
    },

    /// A layer or linetype reference could not be resolved while writing
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// IO error occurred mid-stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DxfError {
    /// Create an `InvalidFile` error at the given line.
    pub fn invalid(line: usize, message: impl Into<String>) -> Self {
        DxfError::InvalidFile {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for opendxf operations
pub type Result<T> = std::result::Result<T, DxfError>;
