//! # Poly Path
//!
//! Cursor-path notation for building polyhedral meshes one instruction at a
//! time.
//!
//! ## Architecture
//!
//! ```text
//! path text ──lexer──▶ tokens ──interpreter──▶ PathBuilder ──to_mesh──▶ Mesh
//! ```
//!
//! ## Grammar
//!
//! | Letter | Instruction |
//! |--------|-------------|
//! | `M` / `m` | move the cursor (absolute / relative) |
//! | `V` / `v` | begin: create a vertex, closing any open face |
//! | `L` / `l` | continue: add a vertex to the open face |
//! | `Z` / `z` | close the open face |
//!
//! Arguments are three coordinates (`°` or `'` marks an angle) or a `#n`
//! vertex reference. `[colour]` sets the colour of faces opened later.
//!
//! ## Usage
//!
//! ```rust
//! // unit square in the XZ plane
//! let mesh = poly_path::build_mesh("V0 0 0 L1 0 0 l0 0 1 L0 0 1 Z").unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.edge_count(), 4);
//! ```

pub mod builder;
pub mod error;
pub mod interpreter;
pub mod lexer;

pub use builder::{Mode, PathBuilder, Target};
pub use error::{PathError, PathResult};
pub use interpreter::build_mesh;
