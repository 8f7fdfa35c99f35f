//! # Notation Errors

use thiserror::Error;

/// Errors raised while tokenizing or resolving a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Text where a step was expected but none can start.
    #[error("malformed notation at '{remaining}'")]
    MalformedNotation {
        /// Unconsumed input from the point of failure.
        remaining: String,
    },

    /// No factory matched the step under any lookup.
    #[error("unknown name '{name}'")]
    UnknownName {
        /// Step name with its numeric argument as written.
        name: String,
    },

    /// A factory rejected the arguments.
    #[error("invalid parameters for '{name}': {args:?}")]
    InvalidParameters {
        /// Registered factory name.
        name: String,
        /// Arguments handed to the factory.
        args: Vec<String>,
    },

    /// A chain without any step.
    #[error("empty notation")]
    EmptyNotation,
}

impl NotationError {
    /// Creates a malformed-notation error from the unconsumed input.
    pub fn malformed(remaining: impl Into<String>) -> Self {
        Self::MalformedNotation {
            remaining: remaining.into(),
        }
    }
}

/// Result type for notation operations.
pub type NotationResult<T> = Result<T, NotationError>;
