//! # Mesh Errors
//!
//! Error types for mesh construction and colour parsing.

use thiserror::Error;

/// Errors that can occur while building meshes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Faces were given but there are no vertices to index into.
    #[error("Cannot build {faces} face(s) without vertices")]
    NoVertices { faces: usize },

    /// Colour text matched no supported notation or name.
    #[error("Unknown color: {text}")]
    UnknownColor { text: String },
}

impl MeshError {
    /// Creates an unknown colour error.
    pub fn unknown_color(text: impl Into<String>) -> Self {
        Self::UnknownColor { text: text.into() }
    }
}
