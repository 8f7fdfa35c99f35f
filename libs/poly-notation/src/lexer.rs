//! # Chain Tokenizer
//!
//! Splits chain text into [`Step`]s. Each step is a name, an optional
//! numeric argument and an optional brace-delimited argument list:
//!
//! ```text
//! t*3{-a 1}   name "t*", number "3", args ["-a", "1"]
//! (scale){-f 2}
//! P2,5        number written with ',' as decimal separator
//! T2,         trailing separator, number 2
//! ```
//!
//! Names are one ASCII letter (optionally followed by `*`) or the text
//! inside a balanced pair of parentheses. Whitespace separates steps.
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::lexer::tokenize;
//!
//! let steps = tokenize("(scale){-f 2} dT3").unwrap();
//! assert_eq!(steps.len(), 3);
//! assert_eq!(steps[0].name, "scale");
//! assert_eq!(steps[2].raw_number(), Some("3"));
//! ```

use std::fmt;

use config::constants::STAR_MODIFIER;
use serde::{Deserialize, Serialize};

use crate::error::{NotationError, NotationResult};

// =============================================================================
// STEP
// =============================================================================

/// Numeric argument of a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numeric {
    /// Text as written (`2,5`).
    pub raw: String,
    /// Text with `.` as decimal separator (`2.5`).
    pub normalized: String,
    /// Parsed value.
    pub value: f64,
}

/// One parsed step of a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Name without parentheses.
    pub name: String,
    /// Whether the name was written in parentheses.
    pub parenthesized: bool,
    /// Optional numeric argument.
    pub number: Option<Numeric>,
    /// Arguments from the brace list.
    pub args: Vec<String>,
}

impl Step {
    /// Creates a step with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let parenthesized = !is_letter_name(&name);
        Self {
            name,
            parenthesized,
            number: None,
            args: Vec::new(),
        }
    }

    /// Numeric argument as written.
    pub fn raw_number(&self) -> Option<&str> {
        self.number.as_ref().map(|n| n.raw.as_str())
    }

    /// Name followed by the numeric argument as written (`T2`).
    pub fn label(&self) -> String {
        format!("{}{}", self.name, self.raw_number().unwrap_or_default())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parenthesized {
            write!(f, "({})", self.name)?;
        } else {
            write!(f, "{}", self.name)?;
        }
        if let Some(raw) = self.raw_number() {
            write!(f, "{raw}")?;
        }
        if !self.args.is_empty() {
            write!(f, "{{{}}}", self.args.join(" "))?;
        }
        Ok(())
    }
}

/// True for `a`, `T`, `t*`.
fn is_letter_name(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => c.is_ascii_alphabetic(),
        (Some(c), Some(m), None) => c.is_ascii_alphabetic() && m == STAR_MODIFIER,
        _ => false,
    }
}

// =============================================================================
// TOKENIZER
// =============================================================================

struct Reader<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Consumes a balanced `open ... close` group starting at the current
    /// character and returns the text between the outermost pair.
    fn balanced(&mut self, open: char, close: char) -> Option<&'a str> {
        let start = self.offset;
        let mut depth = 0usize;
        while let Some(c) = self.advance() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    let end = self.offset - close.len_utf8();
                    return Some(&self.source[start + open.len_utf8()..end]);
                }
            }
        }
        None
    }
}

/// Tokenizes a whole chain.
///
/// # Errors
///
/// Returns [`NotationError::MalformedNotation`] with the unconsumed input
/// when a step cannot start or a delimiter is unbalanced.
pub fn tokenize(source: &str) -> NotationResult<Vec<Step>> {
    let mut reader = Reader { source, offset: 0 };
    let mut steps = Vec::new();
    loop {
        reader.advance_while(char::is_whitespace);
        if reader.peek().is_none() {
            break;
        }
        steps.push(scan_step(&mut reader)?);
    }
    Ok(steps)
}

fn scan_step(reader: &mut Reader<'_>) -> NotationResult<Step> {
    let start = reader.rest();
    let malformed = || NotationError::malformed(start);

    let (name, parenthesized) = match reader.peek() {
        Some(c) if c.is_ascii_alphabetic() => {
            reader.advance();
            let mut name = c.to_string();
            if reader.peek() == Some(STAR_MODIFIER) {
                reader.advance();
                name.push(STAR_MODIFIER);
            }
            (name, false)
        }
        Some('(') => {
            let inner = reader.balanced('(', ')').ok_or_else(malformed)?;
            (inner.to_string(), true)
        }
        _ => return Err(malformed()),
    };

    let number = match reader.peek() {
        Some(c) if c.is_ascii_digit() => Some(scan_number(reader)),
        _ => None,
    };

    let args = if reader.peek() == Some('{') {
        let inner = reader
            .balanced('{', '}')
            .ok_or_else(|| NotationError::malformed(start))?;
        split_arguments(inner)
    } else {
        Vec::new()
    };

    Ok(Step {
        name,
        parenthesized,
        number,
        args,
    })
}

/// Digits with at most one `.` or `,` decimal separator, which may be
/// trailing (`2,`). A trailing separator stays in `raw` only.
fn scan_number(reader: &mut Reader<'_>) -> Numeric {
    let start = reader.offset;
    reader.advance_while(|c| c.is_ascii_digit());
    if matches!(reader.peek(), Some('.' | ',')) {
        reader.advance();
        reader.advance_while(|c| c.is_ascii_digit());
    }
    let raw = reader.source[start..reader.offset].to_string();
    let normalized = raw.trim_end_matches(['.', ',']).replace(',', ".");
    let value = normalized.parse().unwrap_or_default();
    Numeric {
        raw,
        normalized,
        value,
    }
}

/// Splits an argument list on whitespace and commas. Double-quoted text is
/// kept whole without its quotes.
///
/// # Example
///
/// ```rust
/// use poly_notation::lexer::split_arguments;
///
/// assert_eq!(split_arguments("-x 1,-y 2"), vec!["-x", "1", "-y", "2"]);
/// assert_eq!(split_arguments(r#"-c "dark red""#), vec!["-c", "dark red"]);
/// ```
pub fn split_arguments(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;
    for c in text.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if !quoted && (c.is_whitespace() || c == ',') => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

// =============================================================================
// TESTS
// =============================================================================
