//! # Chains
//!
//! A chain is read right to left: the last step is the generator and each
//! step before it is an operator applied to the result so far. `dtC` means
//! `d(t(C))`.
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::{builtins, compile};
//!
//! let chain = compile(builtins::registry(), "(scale){-f 2}C").unwrap();
//! let mesh = chain.run();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.edge_length(0), 2.0);
//! ```

use std::fmt;

use poly_mesh::Mesh;
use tracing::debug;

use crate::error::{NotationError, NotationResult};
use crate::factory::{Generator, Operator};
use crate::lexer::{tokenize, Step};
use crate::registry::Registry;

/// A resolved generator with the operators to apply after it.
pub struct Chain {
    generator: Box<dyn Generator>,
    /// In application order (rightmost operator first).
    operators: Vec<Box<dyn Operator>>,
    steps: Vec<Step>,
}

impl Chain {
    /// Generates the mesh and applies every operator in turn.
    pub fn run(&self) -> Mesh {
        let mut mesh = self.generator.generate();
        for operator in &self.operators {
            mesh = operator.apply(&mesh);
        }
        mesh
    }

    /// Number of operators.
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// The parsed steps as written, left to right.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self.steps.iter().map(Step::to_string).collect();
        f.debug_struct("Chain").field("steps", &steps).finish()
    }
}

/// Tokenizes and resolves a chain against `registry`.
///
/// # Errors
///
/// [`NotationError::EmptyNotation`] for text without steps, otherwise the
/// first tokenizer or resolver error. No partial chain is returned.
pub fn compile(registry: &Registry, text: &str) -> NotationResult<Chain> {
    let steps = tokenize(text)?;
    let Some((last, rest)) = steps.split_last() else {
        return Err(NotationError::EmptyNotation);
    };
    let generator = registry.resolve_generator(last)?;
    let operators = rest
        .iter()
        .rev()
        .map(|step| registry.resolve_operator(step))
        .collect::<NotationResult<Vec<_>>>()?;
    debug!(text, operators = operators.len(), "compiled chain");
    Ok(Chain {
        generator,
        operators,
        steps,
    })
}

impl Registry {
    /// Compiles a chain against this registry. See [`compile`].
    ///
    /// # Errors
    ///
    /// See [`compile`].
    pub fn compile(&self, text: &str) -> NotationResult<Chain> {
        compile(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FnFactory;
    use poly_geom::Point;

    /// Generator of one point at the origin and operators that append a
    /// point at `x = index`, so the order of application is visible.
    fn tracing_registry() -> Registry {
        let append = |x: f64| {
            move |_: &crate::options::ParsedArgs| -> Option<Box<dyn Operator>> {
                Some(Box::new(move |mesh: &Mesh| {
                    let mut points = mesh.positions();
                    points.push(Point::new(x, points.len() as f64, 0.0));
                    Mesh::build(points, &[], &[]).unwrap_or_default()
                }))
            }
        };
        Registry::builder()
            .generator(FnFactory::<dyn Generator>::new("O", &[], |_| {
                Some(Box::new(|| {
                    Mesh::build(vec![Point::ZERO], &[], &[]).unwrap_or_default()
                }))
            }))
            .operator(FnFactory::new("a", &[], append(1.0)))
            .operator(FnFactory::new("b", &[], append(2.0)))
            .build()
    }

    #[test]
    fn test_operators_apply_right_to_left() {
        let chain = compile(&tracing_registry(), "abO").unwrap();
        assert_eq!(chain.operator_count(), 2);
        let mesh = chain.run();
        assert_eq!(mesh.position(1), Point::new(2.0, 1.0, 0.0));
        assert_eq!(mesh.position(2), Point::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_generator_only() {
        let chain = tracing_registry().compile(" O ").unwrap();
        assert_eq!(chain.operator_count(), 0);
        assert_eq!(chain.run().vertex_count(), 1);
        assert_eq!(format!("{chain:?}"), r#"Chain { steps: ["O"] }"#);
    }

    #[test]
    fn test_errors_are_fatal() {
        let registry = tracing_registry();
        assert_eq!(compile(&registry, "   ").err(), Some(NotationError::EmptyNotation));
        assert!(matches!(
            compile(&registry, "aqO"),
            Err(NotationError::UnknownName { name }) if name == "q"
        ));
        // the generator position only consults generators
        assert!(matches!(
            compile(&registry, "Oa"),
            Err(NotationError::UnknownName { name }) if name == "a"
        ));
        assert!(matches!(
            compile(&registry, "a O"),
            Ok(chain) if chain.steps().len() == 2
        ));
        assert!(matches!(
            compile(&registry, "a%O"),
            Err(NotationError::MalformedNotation { .. })
        ));
    }
}
