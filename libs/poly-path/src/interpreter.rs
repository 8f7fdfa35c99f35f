//! # Path Interpreter
//!
//! Executes path text against a [`PathBuilder`].
//!
//! Coordinates accumulate until three have been read and are then
//! dispatched to the active instruction; further triples repeat it. Angle
//! markers choose the coordinate system:
//!
//! | Markers | System |
//! |---------|--------|
//! | none | Cartesian `x y z` |
//! | third | cylindrical `r height azimuth°` |
//! | second and third | spherical `r elevation° azimuth°` |
//!
//! A group cut short by an instruction, a colour or the end of input is
//! padded with zeros (plain coordinates only). An instruction letter with no
//! arguments other than `Z` does nothing.

use poly_geom::{Cylindrical, Point, Spherical};
use poly_mesh::{Color, Mesh};
use tracing::trace;

use crate::builder::{Mode, PathBuilder, Target};
use crate::error::{PathError, PathResult};
use crate::lexer::{tokenize, Token, TokenKind};

// =============================================================================
// INSTRUCTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Move,
    Begin,
    Continue,
    Close,
}

/// The instruction coordinates are currently dispatched to.
#[derive(Debug, Clone, Copy)]
struct Active {
    letter: char,
    family: Family,
    mode: Mode,
}

impl Active {
    fn decode(letter: char) -> Option<Self> {
        let family = match letter.to_ascii_uppercase() {
            'M' => Family::Move,
            'V' => Family::Begin,
            'L' => Family::Continue,
            'Z' => Family::Close,
            _ => return None,
        };
        let mode = if letter.is_ascii_uppercase() {
            Mode::Absolute
        } else {
            Mode::Relative
        };
        Some(Self {
            letter,
            family,
            mode,
        })
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

struct Execution<'b, 't> {
    builder: &'b mut PathBuilder,
    source: &'t str,
    active: Option<Active>,
    pending: Vec<&'t Token>,
}

impl<'b, 't> Execution<'b, 't> {
    fn step(&mut self, token: &'t Token) -> PathResult<()> {
        match &token.kind {
            TokenKind::Instruction(letter) => {
                self.flush()?;
                let active = Active::decode(*letter).ok_or_else(|| {
                    PathError::malformed(token.offset, &token.text, "unknown instruction")
                })?;
                if active.family == Family::Close {
                    trace!(instruction = %active.letter, "close");
                    self.builder.close();
                }
                self.active = Some(active);
            }
            TokenKind::Number(_) | TokenKind::Angle(_) => {
                self.require_arguments(token)?;
                self.pending.push(token);
                if self.pending.len() == 3 {
                    self.dispatch_group()?;
                }
            }
            TokenKind::Reference(index) => {
                let active = self.require_arguments(token)?;
                if !self.pending.is_empty() {
                    return Err(PathError::malformed(
                        token.offset,
                        &token.text,
                        "vertex reference inside a coordinate group",
                    ));
                }
                self.apply(active, Target::Vertex(*index))?;
            }
            TokenKind::Color(text) => {
                self.flush()?;
                let color = Color::parse(text)?;
                trace!(%color, "set colour");
                self.builder.set_color(color);
            }
        }
        Ok(())
    }

    /// The active instruction, if it accepts arguments.
    fn require_arguments(&self, token: &Token) -> PathResult<Active> {
        match self.active {
            None => Err(PathError::malformed(
                token.offset,
                &token.text,
                "argument before any instruction",
            )),
            Some(active) if active.family == Family::Close => Err(PathError::malformed(
                token.offset,
                &token.text,
                "close takes no arguments",
            )),
            Some(active) => Ok(active),
        }
    }

    /// Dispatches a short coordinate group, padding missing components.
    fn flush(&mut self) -> PathResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        if self
            .pending
            .iter()
            .any(|t| matches!(t.kind, TokenKind::Angle(_)))
        {
            return Err(self.group_error("angle in an incomplete coordinate group"));
        }
        self.dispatch_group()
    }

    fn dispatch_group(&mut self) -> PathResult<()> {
        let mut values = [0.0; 3];
        let mut angles = [false; 3];
        for (slot, token) in self.pending.iter().enumerate() {
            match token.kind {
                TokenKind::Number(v) => values[slot] = v,
                TokenKind::Angle(v) => {
                    values[slot] = v;
                    angles[slot] = true;
                }
                _ => {}
            }
        }
        let [a, b, c] = values;
        let target = match angles {
            [false, false, false] => Target::Cartesian(Point::new(a, b, c)),
            [false, false, true] => Target::Cylindrical(Cylindrical::new(a, b, c)),
            [false, true, true] => Target::Spherical(Spherical::new(a, b, c)),
            _ => return Err(self.group_error("angle markers in unsupported positions")),
        };
        let active = match self.pending.first() {
            Some(first) => self.require_arguments(first)?,
            None => return Ok(()),
        };
        self.pending.clear();
        self.apply(active, target)
    }

    fn apply(&mut self, active: Active, target: Target) -> PathResult<()> {
        trace!(instruction = %active.letter, ?target, "path instruction");
        match active.family {
            Family::Move => self.builder.move_cursor(target, active.mode),
            Family::Begin => self.builder.begin(target, active.mode),
            Family::Continue => self.builder.continue_to(target, active.mode),
            Family::Close => Err(PathError::malformed(
                0,
                active.letter.to_string(),
                "close takes no arguments",
            )),
        }
    }

    /// Malformed-path error spanning the pending coordinate group.
    fn group_error(&self, message: &str) -> PathError {
        match (self.pending.first(), self.pending.last()) {
            (Some(first), Some(last)) => {
                let end = last.offset + last.text.len();
                PathError::malformed(first.offset, &self.source[first.offset..end], message)
            }
            _ => PathError::malformed(self.source.len(), "", message),
        }
    }
}

fn run(builder: &mut PathBuilder, source: &str, tokens: &[Token]) -> PathResult<()> {
    let mut execution = Execution {
        builder,
        source,
        active: None,
        pending: Vec::new(),
    };
    for token in tokens {
        execution.step(token)?;
    }
    execution.flush()
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

impl PathBuilder {
    /// Executes path text, continuing from the builder's current state.
    ///
    /// On error the instructions before the offending token have already
    /// been applied.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedPath`] for text outside the grammar,
    /// [`PathError::VertexOutOfRange`] for bad references and
    /// [`PathError::Mesh`] for unknown colours.
    ///
    /// # Example
    ///
    /// ```rust
    /// use poly_path::PathBuilder;
    ///
    /// let mut builder = PathBuilder::new();
    /// builder.execute("V0 0 0 1 0 0 0 1 0").unwrap();
    /// assert_eq!(builder.vertex_count(), 3);
    /// assert_eq!(builder.face_count(), 0);
    /// ```
    pub fn execute(&mut self, source: &str) -> PathResult<()> {
        let tokens = tokenize(source)?;
        run(self, source, &tokens)
    }
}

/// Builds a mesh from path text with a fresh builder.
///
/// # Errors
///
/// Returns [`PathError::EmptyPath`] when the text has no tokens, plus any
/// error of [`PathBuilder::execute`] and [`PathBuilder::to_mesh`].
///
/// # Example
///
/// ```rust
/// let mesh = poly_path::build_mesh("V0 0 0 L1 0 0 L0 1 0 Z").unwrap();
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn build_mesh(source: &str) -> PathResult<Mesh> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let mut builder = PathBuilder::new();
    run(&mut builder, source, &tokens)?;
    builder.to_mesh()
}

// =============================================================================
// TESTS
// =============================================================================
