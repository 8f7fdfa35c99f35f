//! # Path Builder
//!
//! Stateful builder behind the path notation. It owns one [`Cursor`], the
//! growing vertex and face lists, an optional current vertex and an optional
//! open face.
//!
//! ## Instruction Families
//!
//! | Family | Effect |
//! |--------|--------|
//! | [`move_cursor`](PathBuilder::move_cursor) | cursor only |
//! | [`begin`](PathBuilder::begin) | closes any open face, then moves and creates a vertex |
//! | [`continue_to`](PathBuilder::continue_to) | opens a face if needed, then moves and adds a vertex to it |
//! | [`close`](PathBuilder::close) | returns to the open face's first vertex and stores the face |
//!
//! Vertex references may be negative: `-1` is the most recently created
//! vertex.
//!
//! ## Example
//!
//! ```rust
//! use poly_geom::Point;
//! use poly_path::{Mode, PathBuilder, Target};
//!
//! let mut builder = PathBuilder::new();
//! builder.begin(Target::Cartesian(Point::ZERO), Mode::Absolute).unwrap();
//! builder.continue_to(Target::Cartesian(Point::X), Mode::Relative).unwrap();
//! builder.continue_to(Target::Cartesian(Point::Y), Mode::Absolute).unwrap();
//! builder.close();
//!
//! let mesh = builder.to_mesh().unwrap();
//! assert_eq!((mesh.vertex_count(), mesh.edge_count(), mesh.face_count()), (3, 3, 1));
//! ```

use poly_geom::{Cursor, Cylindrical, Point, Spherical};
use poly_mesh::{Color, Mesh};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PathError, PathResult};

// =============================================================================
// INSTRUCTION ARGUMENTS
// =============================================================================

/// Whether a target is a position or an offset from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Coordinates are a position.
    Absolute,
    /// Coordinates are added to the cursor's current coordinates.
    Relative,
}

/// Where an instruction sends the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// Cartesian `(x, y, z)`.
    Cartesian(Point),
    /// Cylindrical `(radius, height, azimuth°)`.
    Cylindrical(Cylindrical),
    /// Spherical `(radius, elevation°, azimuth°)`.
    Spherical(Spherical),
    /// An existing vertex; negative indices count back from the newest.
    Vertex(i64),
}

/// Face under construction or stored.
#[derive(Debug, Clone, PartialEq)]
struct PathFace {
    vertices: Vec<usize>,
    color: Color,
}

// =============================================================================
// BUILDER
// =============================================================================

/// Incremental mesh builder driven by cursor instructions.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    cursor: Cursor,
    color: Color,
    points: Vec<Point>,
    faces: Vec<PathFace>,
    current: Option<usize>,
    open: Option<PathFace>,
}

impl PathBuilder {
    /// Creates an empty builder with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Colour given to faces opened from now on.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Vertex the cursor sits on, if it is known to sit on one.
    pub fn current_vertex(&self) -> Option<usize> {
        self.current
    }

    /// Vertices of the open face, if one is open.
    pub fn open_face(&self) -> Option<&[usize]> {
        self.open.as_ref().map(|f| f.vertices.as_slice())
    }

    /// Vertices created so far.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Faces stored so far (excluding an open face).
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions created so far.
    pub fn positions(&self) -> &[Point] {
        &self.points
    }

    // -------------------------------------------------------------------------
    // Instructions
    // -------------------------------------------------------------------------

    /// Moves the cursor without creating geometry.
    ///
    /// The cursor stays "on" a vertex only when the target is a vertex
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::VertexOutOfRange`] for a bad reference.
    pub fn move_cursor(&mut self, target: Target, mode: Mode) -> PathResult<()> {
        let (cursor, existing) = self.locate(target, mode)?;
        self.cursor = cursor;
        self.current = existing;
        Ok(())
    }

    /// Starts a new vertex chain: closes any open face, moves the cursor and
    /// creates a vertex there (or lands on the referenced vertex).
    ///
    /// # Errors
    ///
    /// Returns [`PathError::VertexOutOfRange`] for a bad reference.
    pub fn begin(&mut self, target: Target, mode: Mode) -> PathResult<()> {
        if let Target::Vertex(index) = target {
            self.resolve(index)?;
        }
        self.close();
        let (cursor, existing) = self.locate(target, mode)?;
        self.cursor = cursor;
        let vertex = match existing {
            Some(vertex) => vertex,
            None => self.push_vertex(),
        };
        self.current = Some(vertex);
        Ok(())
    }

    /// Extends the open face to a new or referenced vertex, opening a face
    /// at the current vertex first when none is open.
    ///
    /// References resolve after the implicit open, so `-1` may name the
    /// vertex it created. Referencing the open face's first vertex closes
    /// the face.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::VertexOutOfRange`] for a bad reference; the
    /// builder is left unchanged.
    pub fn continue_to(&mut self, target: Target, mode: Mode) -> PathResult<()> {
        if let Target::Vertex(index) = target {
            let creates_start = self.open.is_none() && self.current.is_none();
            normalize(index, self.points.len() + usize::from(creates_start))?;
        }
        if self.open.is_none() {
            let first = match self.current {
                Some(vertex) => vertex,
                None => self.push_vertex(),
            };
            self.open = Some(PathFace {
                vertices: vec![first],
                color: self.color,
            });
        }
        let (cursor, existing) = self.locate(target, mode)?;
        if existing.is_some() && existing == self.open.as_ref().map(|f| f.vertices[0]) {
            self.close();
            return Ok(());
        }
        self.cursor = cursor;
        let vertex = match existing {
            Some(vertex) => vertex,
            None => self.push_vertex(),
        };
        self.current = Some(vertex);
        if let Some(face) = self.open.as_mut() {
            face.vertices.push(vertex);
        }
        Ok(())
    }

    /// Closes the open face, returning the cursor to its first vertex.
    /// Does nothing when no face is open.
    pub fn close(&mut self) {
        let Some(face) = self.open.take() else {
            return;
        };
        let first = face.vertices[0];
        self.cursor.set_cartesian(self.points[first]);
        self.current = Some(first);
        self.faces.push(face);
    }

    /// Sets the colour for faces opened later.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Discards all vertices and faces; keeps cursor and colour.
    pub fn clear(&mut self) {
        self.points.clear();
        self.faces.clear();
        self.current = None;
        self.open = None;
    }

    // -------------------------------------------------------------------------
    // Conversion
    // -------------------------------------------------------------------------

    /// Builds a mesh from the vertices and faces so far.
    ///
    /// An open face is included as if closed. Repeated consecutive vertices
    /// collapse to one, then faces with fewer than three vertices are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Propagates [`poly_mesh::MeshError`] from mesh construction.
    pub fn to_mesh(&self) -> PathResult<Mesh> {
        let mut indices = Vec::new();
        let mut colors = Vec::new();
        for (position, face) in self.faces.iter().chain(self.open.as_ref()).enumerate() {
            let mut vertices: Vec<i64> = face.vertices.iter().map(|&v| v as i64).collect();
            vertices.dedup();
            while vertices.len() > 1 && vertices.first() == vertices.last() {
                vertices.pop();
            }
            if vertices.len() < 3 {
                debug!(
                    face = position,
                    degree = vertices.len(),
                    "dropping degenerate path face"
                );
                continue;
            }
            indices.push(vertices);
            colors.push(face.color);
        }
        debug!(
            vertices = self.points.len(),
            faces = indices.len(),
            "converting path to mesh"
        );
        Ok(Mesh::build(self.points.clone(), &indices, &colors)?)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Computes the cursor after moving to `target`, plus the vertex it
    /// lands on when `target` is a reference. Leaves `self` untouched.
    fn locate(&self, target: Target, mode: Mode) -> PathResult<(Cursor, Option<usize>)> {
        let mut cursor = self.cursor;
        match (target, mode) {
            (Target::Vertex(index), _) => {
                let vertex = self.resolve(index)?;
                cursor.set_cartesian(self.points[vertex]);
                return Ok((cursor, Some(vertex)));
            }
            (Target::Cartesian(p), Mode::Absolute) => cursor.set_cartesian(p),
            (Target::Cartesian(d), Mode::Relative) => cursor.move_cartesian(d),
            (Target::Cylindrical(c), Mode::Absolute) => cursor.set_cylindrical(c),
            (Target::Cylindrical(d), Mode::Relative) => cursor.move_cylindrical(d),
            (Target::Spherical(s), Mode::Absolute) => cursor.set_spherical(s),
            (Target::Spherical(d), Mode::Relative) => cursor.move_spherical(d),
        }
        Ok((cursor, None))
    }

    fn resolve(&self, index: i64) -> PathResult<usize> {
        normalize(index, self.points.len())
    }

    /// Appends a vertex at the cursor and returns its index.
    fn push_vertex(&mut self) -> usize {
        self.points.push(self.cursor.position());
        self.points.len() - 1
    }
}

/// Normalises a possibly negative vertex reference against `count`
/// vertices.
fn normalize(index: i64, count: usize) -> PathResult<usize> {
    let normalized = if index < 0 { index + count as i64 } else { index };
    if normalized < 0 || normalized >= count as i64 {
        return Err(PathError::VertexOutOfRange { index, count });
    }
    Ok(normalized as usize)
}

#[cfg(test)]
mod tests;
