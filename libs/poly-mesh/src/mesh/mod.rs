//! # Mesh Data Structure
//!
//! Immutable polyhedral mesh: vertices, deduplicated undirected edges and
//! coloured oriented faces. All cross references (edge → vertex,
//! face → vertex, face → edge) are indices into the owning mesh.
//!
//! A mesh is assembled once by [`Mesh::build`] and never mutated; operations
//! such as [`Mesh::transform`] return a new mesh.

use std::collections::HashMap;

use poly_geom::{vector, Point, Transform};

use crate::color::Color;
use crate::error::MeshError;

// =============================================================================
// VERTEX / EDGE / FACE
// =============================================================================

/// A mesh vertex; its index equals its position in the input point list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    index: usize,
    position: Point,
}

impl Vertex {
    /// 0-based vertex index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Vertex position.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }
}

/// An undirected edge, stored with the orientation in which it was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    index: usize,
    vertices: [usize; 2],
}

impl Edge {
    /// 0-based edge index in encounter order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Endpoint vertex indices in first-seen order.
    #[inline]
    pub fn vertices(&self) -> [usize; 2] {
        self.vertices
    }

    /// Unordered key `(min, max)` identifying the edge.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        edge_key(self.vertices[0], self.vertices[1])
    }

    /// True if `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// The endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        match self.vertices {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }
}

/// An oriented face.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    index: usize,
    vertices: Vec<usize>,
    edges: Vec<usize>,
    color: Color,
}

impl Face {
    /// 0-based face index (input order).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Vertex indices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Edge indices; edge `k` joins vertex `k` and vertex `k + 1` (wrapping).
    #[inline]
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Face colour.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of vertices.
    #[inline]
    pub fn degree(&self) -> usize {
        self.vertices.len()
    }

    /// Average of the face's vertex positions.
    pub fn centroid(&self, mesh: &Mesh) -> Point {
        let positions: Vec<Point> = self.vertices.iter().map(|&v| mesh.position(v)).collect();
        vector::average(&positions).unwrap_or(Point::ZERO)
    }

    /// Unit normal by Newell's method; zero for degenerate faces.
    pub fn normal(&self, mesh: &Mesh) -> Point {
        let n = self.vertices.len();
        let mut normal = Point::ZERO;
        for k in 0..n {
            let a = mesh.position(self.vertices[k]);
            let b = mesh.position(self.vertices[(k + 1) % n]);
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        vector::normalize(normal)
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// =============================================================================
// MESH
// =============================================================================

/// An immutable polyhedral mesh.
///
/// # Example
///
/// ```rust
/// use poly_mesh::Mesh;
/// use poly_geom::Point;
///
/// // a square and a triangle sharing the edge 1-2
/// let points = vec![Point::ZERO, Point::X, Point::new(1.0, 1.0, 0.0), Point::Y, Point::new(2.0, 0.5, 0.0)];
/// let mesh = Mesh::build(points, &[vec![0, 1, 2, 3], vec![2, 1, 4]], &[]).unwrap();
/// assert_eq!(mesh.edge_count(), 6);
/// assert_eq!(mesh.face(0).edges()[1], mesh.face(1).edges()[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from points, face index lists and face colours.
    ///
    /// Face indices are reduced modulo the point count (so `-1` is the last
    /// point). Colours are cycled when there are fewer colours than faces;
    /// with no colours every face is [`Color::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::NoVertices`] when faces are given without points.
    pub fn build(points: Vec<Point>, faces: &[Vec<i64>], colors: &[Color]) -> Result<Self, MeshError> {
        if points.is_empty() && !faces.is_empty() {
            return Err(MeshError::NoVertices { faces: faces.len() });
        }
        let count = points.len() as i64;
        let indices: Vec<Vec<usize>> = faces
            .iter()
            .map(|face| {
                face.iter()
                    .map(|&i| i.rem_euclid(count) as usize)
                    .collect()
            })
            .collect();
        let face_colors: Vec<Color> = (0..indices.len())
            .map(|i| {
                if colors.is_empty() {
                    Color::DEFAULT
                } else {
                    colors[i % colors.len()]
                }
            })
            .collect();
        Ok(Self::assemble(points, indices, face_colors))
    }

    /// Wires up vertices, edges and faces from in-range indices.
    fn assemble(points: Vec<Point>, faces: Vec<Vec<usize>>, colors: Vec<Color>) -> Self {
        let vertices = points
            .into_iter()
            .enumerate()
            .map(|(index, position)| Vertex { index, position })
            .collect();

        let mut edges: Vec<Edge> = Vec::new();
        let mut lookup: HashMap<(usize, usize), usize> = HashMap::new();
        let mut built_faces = Vec::with_capacity(faces.len());

        for (index, (face_vertices, color)) in faces.into_iter().zip(colors).enumerate() {
            let n = face_vertices.len();
            let mut face_edges = Vec::with_capacity(n);
            for k in 0..n {
                let a = face_vertices[k];
                let b = face_vertices[(k + 1) % n];
                let next = edges.len();
                let edge = *lookup.entry(edge_key(a, b)).or_insert(next);
                if edge == next {
                    edges.push(Edge {
                        index: next,
                        vertices: [a, b],
                    });
                }
                face_edges.push(edge);
            }
            built_faces.push(Face {
                index,
                vertices: face_vertices,
                edges: face_edges,
                color,
            });
        }

        Self {
            vertices,
            edges,
            faces: built_faces,
        }
    }

    /// Rebuilds the mesh with the same topology and transformed positions.
    ///
    /// `None` copies positions unchanged.
    pub fn transform(&self, transform: Option<&Transform>) -> Mesh {
        let points = self
            .vertices
            .iter()
            .map(|v| match transform {
                Some(t) => t.transform_point(v.position),
                None => v.position,
            })
            .collect();
        let faces = self.faces.iter().map(|f| f.vertices.clone()).collect();
        let colors = self.faces.iter().map(|f| f.color).collect();
        Self::assemble(points, faces, colors)
    }

    /// Same geometry with every face set to `color`.
    pub fn recolored(&self, color: Color) -> Mesh {
        let points = self.positions();
        let faces = self.faces.iter().map(|f| f.vertices.clone()).collect();
        let colors = vec![color; self.faces.len()];
        Self::assemble(points, faces, colors)
    }

    /// Same geometry with every face's winding reversed.
    pub fn reversed(&self) -> Mesh {
        let points = self.positions();
        let faces = self
            .faces
            .iter()
            .map(|f| f.vertices.iter().rev().copied().collect())
            .collect();
        let colors = self.face_colors();
        Self::assemble(points, faces, colors)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in encounter order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All faces in input order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// Edge at `index`.
    #[inline]
    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    /// Face at `index`.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Position of vertex `index`.
    #[inline]
    pub fn position(&self, index: usize) -> Point {
        self.vertices[index].position
    }

    /// Copy of all vertex positions.
    pub fn positions(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Face vertex lists as signed indices, ready for [`Mesh::build`].
    pub fn face_indices(&self) -> Vec<Vec<i64>> {
        self.faces
            .iter()
            .map(|f| f.vertices.iter().map(|&v| v as i64).collect())
            .collect()
    }

    /// Colour of every face, in face order.
    pub fn face_colors(&self) -> Vec<Color> {
        self.faces.iter().map(|f| f.color).collect()
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn find_edge(&self, a: usize, b: usize) -> Option<&Edge> {
        self.edges.iter().find(|e| e.key() == edge_key(a, b))
    }

    /// Length of edge `index`.
    pub fn edge_length(&self, index: usize) -> f64 {
        let [a, b] = self.edges[index].vertices;
        vector::distance(self.position(a), self.position(b))
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let positions = self.positions();
        Some((
            vector::min_by_coordinate(&positions)?,
            vector::max_by_coordinate(&positions)?,
        ))
    }

    /// Average vertex position, or `None` when empty.
    pub fn centroid(&self) -> Option<Point> {
        vector::average(&self.positions())
    }

    /// `V − E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges.len() as i64 + self.faces.len() as i64
    }
}
