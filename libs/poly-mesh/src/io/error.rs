//! Error types for mesh file I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::MeshError;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing mesh files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Invalid file content.
    #[error("invalid file content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number (0 when the problem is not tied to a line).
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// The parsed data did not form a mesh.
    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Written bytes were not UTF-8.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl IoError {
    /// Create an `InvalidContent` error for `line`.
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}
