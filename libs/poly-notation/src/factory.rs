//! # Factory Contract
//!
//! Generators produce a mesh from nothing; operators map one mesh to
//! another. Factories build either from a list of string arguments and
//! declare the options they understand, which the resolver consults to tell
//! a repeat count from a numeric parameter.
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::{Factory, FnFactory, Operator, OptionSpec};
//!
//! // operator that ignores its input and returns an empty mesh
//! let empty = FnFactory::<dyn Operator>::new("e", &[], |_| {
//!     Some(Box::new(|_: &poly_mesh::Mesh| poly_mesh::Mesh::new()))
//! });
//! assert_eq!(empty.name(), "e");
//! assert!(empty.parse(&[]).is_some());
//! assert!(!empty.declares('n'));
//! ```

use std::fmt;

use poly_mesh::Mesh;

use crate::options::{OptionSpec, ParsedArgs};

// =============================================================================
// PRODUCTS
// =============================================================================

/// Zero-input producer of a mesh.
pub trait Generator: Send + Sync {
    /// Produces the mesh.
    fn generate(&self) -> Mesh;
}

/// One-mesh-in, one-mesh-out transformation.
pub trait Operator: Send + Sync {
    /// Applies the operator.
    fn apply(&self, mesh: &Mesh) -> Mesh;
}

impl<F> Generator for F
where
    F: Fn() -> Mesh + Send + Sync,
{
    fn generate(&self) -> Mesh {
        self()
    }
}

impl<F> Operator for F
where
    F: Fn(&Mesh) -> Mesh + Send + Sync,
{
    fn apply(&self, mesh: &Mesh) -> Mesh {
        self(mesh)
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Named builder of generators or operators.
pub trait Factory: Send + Sync {
    /// What the factory builds (`dyn Generator` or `dyn Operator`).
    type Product: ?Sized;

    /// Registered name.
    fn name(&self) -> &str;

    /// Options understood by [`Factory::parse`].
    fn options(&self) -> &[OptionSpec];

    /// Builds a product, or `None` when the arguments are not acceptable.
    fn parse(&self, args: &[String]) -> Option<Box<Self::Product>>;

    /// True if `flag` is among the declared options.
    fn declares(&self, flag: char) -> bool {
        self.options().iter().any(|o| o.flag == flag)
    }
}

/// Factory object building generators.
pub type GeneratorFactory = dyn Factory<Product = dyn Generator>;

/// Factory object building operators.
pub type OperatorFactory = dyn Factory<Product = dyn Operator>;

/// Closure that builds a product from parsed arguments.
type BuildFn<P> = dyn Fn(&ParsedArgs) -> Option<Box<P>> + Send + Sync;

/// Factory backed by a closure over [`ParsedArgs`].
///
/// Arguments are parsed against the declared options first; an undeclared
/// flag rejects them before the closure runs.
pub struct FnFactory<P: ?Sized> {
    name: String,
    options: Vec<OptionSpec>,
    build: Box<BuildFn<P>>,
}

impl<P: ?Sized> FnFactory<P> {
    /// Creates a factory.
    pub fn new<F>(name: impl Into<String>, options: &[OptionSpec], build: F) -> Self
    where
        F: Fn(&ParsedArgs) -> Option<Box<P>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            options: options.to_vec(),
            build: Box::new(build),
        }
    }
}

impl<P: ?Sized> Factory for FnFactory<P> {
    type Product = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    fn parse(&self, args: &[String]) -> Option<Box<P>> {
        let parsed = ParsedArgs::parse(&self.options, args)?;
        (self.build)(&parsed)
    }
}

impl<P: ?Sized> fmt::Debug for FnFactory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// REPEAT WRAPPER
// =============================================================================

/// Applies an operator a fixed number of times in sequence.
pub struct Repeated {
    inner: Box<dyn Operator>,
    count: usize,
}

impl Repeated {
    /// Wraps `inner`; counts below one become one.
    pub fn new(inner: Box<dyn Operator>, count: i64) -> Self {
        Self {
            inner,
            count: count.max(1) as usize,
        }
    }

    /// Number of applications.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Operator for Repeated {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mut current = self.inner.apply(mesh);
        for _ in 1..self.count {
            current = self.inner.apply(&current);
        }
        current
    }
}

impl fmt::Debug for Repeated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeated")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}
