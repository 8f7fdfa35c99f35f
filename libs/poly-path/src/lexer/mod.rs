//! # Path Lexer
//!
//! Splits path text into instruction letters, coordinates, angles, vertex
//! references and colours. Whitespace and commas separate tokens.
//!
//! ## Example
//!
//! ```rust
//! use poly_path::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("V1 0 90° [red]").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Instruction('V'));
//! assert_eq!(tokens[3].kind, TokenKind::Angle(90.0));
//! assert_eq!(tokens[4].kind, TokenKind::Color("red".to_string()));
//! ```

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use config::constants::{is_angle_marker, VERTEX_REFERENCE_PREFIX};

use crate::error::{PathError, PathResult};

/// Instruction letters understood by the builder.
pub const INSTRUCTIONS: [char; 8] = ['M', 'm', 'V', 'v', 'L', 'l', 'Z', 'z'];

// =============================================================================
// LEXER
// =============================================================================

/// Path lexer.
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for path text.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedPath`] at the first character that
    /// cannot start a token.
    pub fn tokenize(mut self) -> PathResult<Vec<Token>> {
        loop {
            self.scanner
                .advance_while(|c| c.is_whitespace() || c == ',');
            if self.scanner.is_eof() {
                break;
            }
            let token = self.scan_token()?;
            self.tokens.push(token);
        }
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> PathResult<Token> {
        let start = self.scanner.offset();
        match self.scanner.peek() {
            Some(c) if INSTRUCTIONS.contains(&c) => {
                self.scanner.advance();
                Ok(Token::new(TokenKind::Instruction(c), start, c.to_string()))
            }
            Some(c) if c == VERTEX_REFERENCE_PREFIX => self.scan_reference(start),
            Some('[') => self.scan_color(start),
            Some(c) if starts_number(c, self.scanner.peek_next()) => self.scan_number(start),
            _ => Err(self.unexpected(start, "unexpected character")),
        }
    }

    /// `#` followed by a signed integer.
    fn scan_reference(&mut self, start: usize) -> PathResult<Token> {
        self.scanner.advance();
        let digits = self.scanner.offset();
        if matches!(self.scanner.peek(), Some('-' | '+')) {
            self.scanner.advance();
        }
        self.scanner.advance_while(|c| c.is_ascii_digit());
        let value = self.scanner.slice_from(digits);
        let index = value
            .parse::<i64>()
            .map_err(|_| self.unexpected(start, "expected a vertex index after '#'"))?;
        Ok(Token::new(
            TokenKind::Reference(index),
            start,
            self.scanner.slice_from(start),
        ))
    }

    /// `[` colour text `]`.
    fn scan_color(&mut self, start: usize) -> PathResult<Token> {
        self.scanner.advance();
        let inner = self.scanner.offset();
        self.scanner.advance_while(|c| c != ']');
        if self.scanner.is_eof() {
            return Err(PathError::malformed(
                start,
                self.scanner.slice_from(start),
                "unterminated colour",
            ));
        }
        let text = self.scanner.slice_from(inner).trim().to_string();
        self.scanner.advance();
        Ok(Token::new(
            TokenKind::Color(text),
            start,
            self.scanner.slice_from(start),
        ))
    }

    /// Signed decimal with optional exponent and angle marker.
    fn scan_number(&mut self, start: usize) -> PathResult<Token> {
        if matches!(self.scanner.peek(), Some('-' | '+')) {
            self.scanner.advance();
        }
        self.scanner.advance_while(|c| c.is_ascii_digit());
        if self.scanner.peek() == Some('.') {
            self.scanner.advance();
            self.scanner.advance_while(|c| c.is_ascii_digit());
        }
        if matches!(self.scanner.peek(), Some('e' | 'E'))
            && self
                .scanner
                .peek_next()
                .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+')
        {
            self.scanner.advance();
            if matches!(self.scanner.peek(), Some('-' | '+')) {
                self.scanner.advance();
            }
            self.scanner.advance_while(|c| c.is_ascii_digit());
        }
        let literal = self.scanner.slice_from(start);
        let value = literal
            .parse::<f64>()
            .map_err(|_| self.unexpected(start, "invalid number"))?;

        let kind = match self.scanner.peek() {
            Some(c) if is_angle_marker(c) => {
                self.scanner.advance();
                TokenKind::Angle(value)
            }
            _ => TokenKind::Number(value),
        };
        Ok(Token::new(kind, start, self.scanner.slice_from(start)))
    }

    /// Error naming the text from `start` to the next separator.
    fn unexpected(&self, start: usize, message: &str) -> PathError {
        let mut probe = self.scanner.clone();
        probe.advance_while(|c| !c.is_whitespace() && c != ',');
        let mut text = probe.slice_from(start);
        if text.is_empty() {
            text = probe.rest();
        }
        PathError::malformed(start, text, message)
    }
}

/// True if `c` (followed by `next`) begins a number.
fn starts_number(c: char, next: Option<char>) -> bool {
    match c {
        '0'..='9' => true,
        '.' => next.is_some_and(|n| n.is_ascii_digit()),
        '-' | '+' => next.is_some_and(|n| n.is_ascii_digit() || n == '.'),
        _ => false,
    }
}

/// Tokenizes path text.
///
/// # Errors
///
/// See [`Lexer::tokenize`].
pub fn tokenize(source: &str) -> PathResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

// =============================================================================
// TESTS
// =============================================================================
