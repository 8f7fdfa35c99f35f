//! # Path Errors

use poly_mesh::MeshError;
use thiserror::Error;

/// Errors raised while tokenizing or executing a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Text that does not fit the path grammar.
    #[error("malformed path at offset {offset}: {message} near '{text}'")]
    MalformedPath {
        /// Byte offset of the offending text.
        offset: usize,
        /// The offending text.
        text: String,
        /// What was wrong with it.
        message: String,
    },

    /// A vertex reference outside the vertices created so far.
    #[error("vertex index {index} out of range for {count} vertices")]
    VertexOutOfRange {
        /// Index as written (possibly negative).
        index: i64,
        /// Vertices available at the time.
        count: usize,
    },

    /// Path text without any instruction.
    #[error("path contains no instructions")]
    EmptyPath,

    /// Mesh construction or colour parsing failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl PathError {
    /// Creates a malformed-path error.
    pub fn malformed(offset: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPath {
            offset,
            text: text.into(),
            message: message.into(),
        }
    }
}

/// Result type for path operations.
pub type PathResult<T> = Result<T, PathError>;
