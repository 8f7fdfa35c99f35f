//! # Path Tokens

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the path lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type and value.
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Token text as written.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, offset: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            text: text.into(),
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of path tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Instruction letter: `M m V v L l Z z`.
    Instruction(char),
    /// Plain coordinate.
    Number(f64),
    /// Coordinate followed by an angle marker, in degrees.
    Angle(f64),
    /// `#n` vertex reference.
    Reference(i64),
    /// `[ ... ]` colour text, trimmed.
    Color(String),
}

impl TokenKind {
    /// True for coordinate tokens (plain or angle).
    pub fn is_coordinate(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Angle(_))
    }
}
