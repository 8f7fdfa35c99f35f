//! # Built-in Factories
//!
//! A small factory library for driving chains end to end.
//!
//! | Name | Kind | Options |
//! |------|------|---------|
//! | `P#` | prism generator | `-n sides` (≥ 3) |
//! | `A#` | antiprism generator | `-n sides` (≥ 3) |
//! | `Y#` | pyramid generator | `-n sides` (≥ 3) |
//! | `T`, `C`, `O` | tetrahedron, cube, octahedron | none |
//! | `(scale)` | operator | `-f factor` or `-x/-y/-z` |
//! | `(rotate)` | operator | `-x/-y/-z` degrees |
//! | `(move)` | operator | `-x/-y/-z` offsets |
//! | `(color)` | operator | positional colour |
//! | `r` | reflection operator | none |
//!
//! ## Example
//!
//! ```rust
//! use poly_notation::builtins;
//!
//! let mesh = builtins::registry().compile("rA5").unwrap().run();
//! assert_eq!(mesh.face_count(), 12);
//! ```

mod generators;
mod operators;

pub use generators::{platonic_factory, ring_factory, Platonic, RingKind, RingSolid};
pub use operators::{
    color_factory, move_factory, reflect_factory, rotate_factory, scale_factory, Paint,
    Reflect, TransformOperator,
};

use std::sync::OnceLock;

use tracing::debug;

use crate::registry::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry of built-in factories.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let registry = Registry::builder()
            .generator(ring_factory("P#", RingKind::Prism))
            .generator(ring_factory("A#", RingKind::Antiprism))
            .generator(ring_factory("Y#", RingKind::Pyramid))
            .generator(platonic_factory("T", Platonic::Tetrahedron))
            .generator(platonic_factory("C", Platonic::Cube))
            .generator(platonic_factory("O", Platonic::Octahedron))
            .operator(scale_factory())
            .operator(rotate_factory())
            .operator(move_factory())
            .operator(color_factory())
            .operator(reflect_factory())
            .build();
        debug!(?registry, "built-in registry ready");
        registry
    })
}
