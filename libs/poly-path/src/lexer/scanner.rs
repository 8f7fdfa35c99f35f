//! # Character Scanner
//!
//! Peekable character scanner tracking the byte offset.

// =============================================================================
// SCANNER
// =============================================================================

/// Character scanner over path text.
///
/// ## Example
///
/// ```rust
/// use poly_path::lexer::Scanner;
///
/// let mut scanner = Scanner::new("90°");
/// scanner.advance_while(|c| c.is_ascii_digit());
/// assert_eq!(scanner.peek(), Some('°'));
/// assert_eq!(scanner.offset(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    offset: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Peek at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek one character past the current one.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Source text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_empty() {
        let scanner = Scanner::new("");
        assert!(scanner.is_eof());
        assert_eq!(scanner.peek(), None);
    }

    #[test]
    fn test_scanner_peek_does_not_consume() {
        let scanner = Scanner::new("V1");
        assert_eq!(scanner.peek(), Some('V'));
        assert_eq!(scanner.peek_next(), Some('1'));
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_scanner_utf8_offsets() {
        let mut scanner = Scanner::new("°x");
        assert_eq!(scanner.advance(), Some('°'));
        assert_eq!(scanner.offset(), 2);
        assert_eq!(scanner.rest(), "x");
        assert_eq!(scanner.slice_from(0), "°");
    }
}
