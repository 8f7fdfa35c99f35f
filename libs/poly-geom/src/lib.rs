//! # Poly Geom
//!
//! Geometry kernel shared by the mesh model, the path builder and the
//! notation resolver.
//!
//! ## Modules
//!
//! - [`vector`]: `Point` (a `glam::DVec3`) and free helpers over points
//! - [`angle`]: degree trigonometry that is exact at quadrant angles
//! - [`transform`]: immutable 3x4 affine [`Transform`]
//! - [`cursor`]: [`Cursor`] with cylindrical and spherical views
//!
//! ## Example
//!
//! ```rust
//! use poly_geom::{Point, Transform};
//!
//! let quarter = Transform::rotation_z(90.0);
//! assert_eq!(quarter.transform_point(Point::X), Point::Y);
//! ```

pub mod angle;
pub mod cursor;
pub mod error;
pub mod transform;
pub mod vector;

pub use cursor::{Cursor, Cylindrical, Spherical};
pub use error::GeomError;
pub use transform::Transform;
pub use vector::Point;
