//! # Factory Registry
//!
//! Two ordered catalogs, generators and operators, keyed by case-sensitive
//! name. A registry is assembled once through [`RegistryBuilder`] and is
//! read-only afterwards.
//!
//! ## Resolution
//!
//! A step `name` with numeric argument `k` (written `raw`) is looked up as:
//!
//! 1. `name + raw` verbatim, with the step's arguments
//! 2. `name + "#"`, with `-n k` put ahead of the arguments
//! 3. `name`; for an operator that does not declare `-n`, `k` is a repeat
//!    count, otherwise `-n k` is injected as in tier 2
//!
//! Without a numeric argument only tier 3 applies, with no injection.
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::{FnFactory, Generator, OptionSpec, Registry};
//! use poly_mesh::Mesh;
//!
//! let registry = Registry::builder()
//!     .generator(FnFactory::<dyn Generator>::new("T#", &[OptionSpec::value('n')], |args| {
//!         let n = args.integer('n')?;
//!         Some(Box::new(move || Mesh::build(vec![Default::default(); n as usize], &[], &[]).unwrap_or_default()))
//!     }))
//!     .build();
//!
//! let step = &poly_notation::lexer::tokenize("T2").unwrap()[0];
//! let generator = registry.resolve_generator(step).unwrap();
//! assert_eq!(generator.generate().vertex_count(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use config::constants::{NUMERIC_FLAG, NUMERIC_WILDCARD};
use tracing::debug;

use crate::error::{NotationError, NotationResult};
use crate::factory::{
    Factory, Generator, GeneratorFactory, Operator, OperatorFactory, Repeated,
};
use crate::lexer::Step;

// =============================================================================
// REGISTRY
// =============================================================================

/// Generator and operator catalogs.
#[derive(Clone, Default)]
pub struct Registry {
    generators: BTreeMap<String, Arc<GeneratorFactory>>,
    operators: BTreeMap<String, Arc<OperatorFactory>>,
}

/// Which lookup matched a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `name + raw number`.
    Exact,
    /// `name + "#"` with the number injected.
    Wildcard,
    /// Bare `name`.
    Bare,
}

impl Registry {
    /// Starts an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Generator factory registered under `name`.
    pub fn generator(&self, name: &str) -> Option<&Arc<GeneratorFactory>> {
        self.generators.get(name)
    }

    /// Operator factory registered under `name`.
    pub fn operator(&self, name: &str) -> Option<&Arc<OperatorFactory>> {
        self.operators.get(name)
    }

    /// Generator names in order.
    pub fn generator_names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Operator names in order.
    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Resolves a step against the generator catalog.
    ///
    /// # Errors
    ///
    /// [`NotationError::UnknownName`] when no tier matches,
    /// [`NotationError::InvalidParameters`] when the factory rejects its
    /// arguments.
    pub fn resolve_generator(&self, step: &Step) -> NotationResult<Box<dyn Generator>> {
        let (factory, tier) = lookup(&self.generators, step)?;
        let args = arguments(step, tier);
        debug!(step = %step, factory = factory.name(), ?tier, "resolved generator");
        build(factory.as_ref(), args)
    }

    /// Resolves a step against the operator catalog, applying the
    /// repeat-count rule of tier 3.
    ///
    /// # Errors
    ///
    /// As for [`Registry::resolve_generator`].
    pub fn resolve_operator(&self, step: &Step) -> NotationResult<Box<dyn Operator>> {
        let (factory, tier) = lookup(&self.operators, step)?;
        if let (Tier::Bare, Some(number)) = (tier, &step.number) {
            if !factory.declares(NUMERIC_FLAG) {
                let count = number.value.trunc() as i64;
                debug!(step = %step, factory = factory.name(), count, "resolved repeated operator");
                let inner = build(factory.as_ref(), step.args.clone())?;
                return Ok(Box::new(Repeated::new(inner, count)));
            }
        }
        let args = arguments(step, tier);
        debug!(step = %step, factory = factory.name(), ?tier, "resolved operator");
        build(factory.as_ref(), args)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .field("operators", &self.operators.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Finds the factory for `step` in one catalog.
fn lookup<'r, P: ?Sized>(
    catalog: &'r BTreeMap<String, Arc<dyn Factory<Product = P>>>,
    step: &Step,
) -> NotationResult<(&'r Arc<dyn Factory<Product = P>>, Tier)> {
    if let Some(raw) = step.raw_number() {
        if let Some(factory) = catalog.get(&format!("{}{}", step.name, raw)) {
            return Ok((factory, Tier::Exact));
        }
        if let Some(factory) = catalog.get(&format!("{}{}", step.name, NUMERIC_WILDCARD)) {
            return Ok((factory, Tier::Wildcard));
        }
    }
    match catalog.get(&step.name) {
        Some(factory) => Ok((factory, Tier::Bare)),
        None => Err(NotationError::UnknownName { name: step.label() }),
    }
}

/// Arguments handed to the factory for a tier.
fn arguments(step: &Step, tier: Tier) -> Vec<String> {
    match (&step.number, tier) {
        (Some(number), Tier::Wildcard | Tier::Bare) => {
            let mut args = vec![format!("-{NUMERIC_FLAG}"), number.normalized.clone()];
            args.extend(step.args.iter().cloned());
            args
        }
        _ => step.args.clone(),
    }
}

fn build<P: ?Sized>(
    factory: &dyn Factory<Product = P>,
    args: Vec<String>,
) -> NotationResult<Box<P>> {
    match factory.parse(&args) {
        Some(product) => Ok(product),
        None => Err(NotationError::InvalidParameters {
            name: factory.name().to_string(),
            args,
        }),
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Collects factories into a [`Registry`].
///
/// A factory registered under an existing name replaces the earlier one.
#[derive(Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Adds a generator factory under its own name.
    pub fn generator<F>(mut self, factory: F) -> Self
    where
        F: Factory<Product = dyn Generator> + 'static,
    {
        self.registry
            .generators
            .insert(factory.name().to_string(), Arc::new(factory));
        self
    }

    /// Adds an operator factory under its own name.
    pub fn operator<F>(mut self, factory: F) -> Self
    where
        F: Factory<Product = dyn Operator> + 'static,
    {
        self.registry
            .operators
            .insert(factory.name().to_string(), Arc::new(factory));
        self
    }

    /// Finishes the registry.
    pub fn build(self) -> Registry {
        self.registry
    }
}
