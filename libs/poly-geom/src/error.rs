//! # Geometry Errors
//!
//! Error types for the vector/transform kernel.

use thiserror::Error;

/// Errors raised by the geometry kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The linear part of a transform has a determinant of exactly zero.
    #[error("Transform is not invertible (determinant {determinant})")]
    NonInvertible {
        /// Determinant that was found.
        determinant: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeomError::NonInvertible { determinant: 0.0 };
        assert!(err.to_string().contains("not invertible"));
    }
}
