//! # Poly Mesh
//!
//! Immutable polyhedral meshes: vertices, deduplicated undirected edges and
//! coloured oriented faces, plus readers and writers for text mesh formats.
//!
//! ## Architecture
//!
//! ```text
//! points + face index lists + colours ──build──▶ Mesh ──transform──▶ Mesh
//!                                                 │
//!                                        io::{Off, Obj, CoordinateTable, Raw}
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use poly_mesh::{Color, Mesh};
//! use poly_geom::Point;
//!
//! let points = vec![Point::ZERO, Point::X, Point::Y, Point::Z];
//! let faces = [vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
//! let mesh = Mesh::build(points, &faces, &[Color::RED]).unwrap();
//! assert_eq!(mesh.edge_count(), 6);
//! assert_eq!(mesh.euler_characteristic(), 2);
//! ```

pub mod color;
pub mod error;
pub mod io;
pub mod mesh;

pub use color::Color;
pub use error::MeshError;
pub use mesh::{Edge, Face, Mesh, Vertex};
