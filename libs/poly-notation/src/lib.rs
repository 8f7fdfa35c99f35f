//! # Poly Notation
//!
//! Compact generator/operator notation for polyhedral meshes.
//!
//! ## Architecture
//!
//! ```text
//! "(scale){-f 2} rP5" ──lexer──▶ [Step] ──Registry──▶ Chain ──run──▶ Mesh
//!                                             │
//!                                  generators │ operators
//!                                   (Factory) │ (Factory)
//! ```
//!
//! A chain is read right to left: the rightmost step names a generator and
//! every step to its left an operator. Each step resolves through three
//! lookups (see [`registry`]), so `P5` can reach a factory registered as
//! `P5`, as `P#` with `-n 5`, or as `P` itself.
//!
//! ## Usage
//!
//! ```rust
//! use poly_notation::{builtins, compile};
//!
//! let chain = compile(builtins::registry(), "(color){red} (move){-y 1} P6").unwrap();
//! let mesh = chain.run();
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.face_count(), 8);
//! ```

pub mod builtins;
pub mod chain;
pub mod error;
pub mod factory;
pub mod lexer;
pub mod options;
pub mod registry;

pub use chain::{compile, Chain};
pub use error::{NotationError, NotationResult};
pub use factory::{
    Factory, FnFactory, Generator, GeneratorFactory, Operator, OperatorFactory, Repeated,
};
pub use lexer::{split_arguments, tokenize, Numeric, Step};
pub use options::{OptionSpec, ParsedArgs};
pub use registry::{Registry, RegistryBuilder, Tier};
