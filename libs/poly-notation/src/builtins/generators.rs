//! Seed polyhedra.
//!
//! Ring-based families (prism, antiprism, pyramid) place their base ring in
//! the XZ plane with unit edges and Y as the axis. All faces wind so that
//! Newell normals point outwards.

use config::constants::approx_zero;
use poly_geom::{angle::sin_cos_degrees, Point};
use poly_mesh::Mesh;

use crate::factory::{FnFactory, Generator};
use crate::options::{OptionSpec, ParsedArgs};

/// Option set of the ring families.
const SIDES: [OptionSpec; 1] = [OptionSpec::value('n')];

/// Ring-based solid family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    /// Two parallel n-gons joined by squares.
    Prism,
    /// Two parallel n-gons, one rotated half a step, joined by triangles.
    Antiprism,
    /// One n-gon joined to an apex by triangles.
    Pyramid,
}

/// Ring-based solid with `sides` sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSolid {
    kind: RingKind,
    sides: usize,
}

impl RingSolid {
    /// Creates the solid; `None` for fewer than three sides.
    pub fn new(kind: RingKind, sides: usize) -> Option<Self> {
        (sides >= 3).then_some(Self { kind, sides })
    }
}

/// Points on a ring of unit edge length at height `y`, starting at
/// `offset` degrees.
fn ring(sides: usize, y: f64, offset: f64) -> Vec<Point> {
    let radius = circumradius(sides);
    (0..sides)
        .map(|k| {
            let (s, c) = sin_cos_degrees(offset + 360.0 * k as f64 / sides as f64);
            Point::new(radius * c, y, radius * s)
        })
        .collect()
}

/// Circumradius of a regular polygon with unit edges.
fn circumradius(sides: usize) -> f64 {
    0.5 / (std::f64::consts::PI / sides as f64).sin()
}

impl Generator for RingSolid {
    fn generate(&self) -> Mesh {
        let n = self.sides;
        let ni = n as i64;
        let next = |k: usize| ((k + 1) % n) as i64;
        let base: Vec<i64> = (0..ni).collect();
        let mut faces = vec![base];

        let points = match self.kind {
            RingKind::Prism => {
                let mut points = ring(n, -0.5, 0.0);
                points.extend(ring(n, 0.5, 0.0));
                faces.push((0..ni).rev().map(|k| k + ni).collect());
                for k in 0..n {
                    let k1 = next(k);
                    faces.push(vec![k as i64, k as i64 + ni, k1 + ni, k1]);
                }
                points
            }
            RingKind::Antiprism => {
                let radius = circumradius(n);
                let chord = 2.0 * radius * sin_cos_degrees(90.0 / n as f64).0;
                let half = (1.0 - chord * chord).max(0.0).sqrt() / 2.0;
                let mut points = ring(n, -half, 0.0);
                points.extend(ring(n, half, 180.0 / n as f64));
                faces.push((0..ni).rev().map(|k| k + ni).collect());
                for k in 0..n {
                    let k1 = next(k);
                    faces.push(vec![k as i64, k as i64 + ni, k1]);
                    faces.push(vec![k1, k as i64 + ni, k1 + ni]);
                }
                points
            }
            RingKind::Pyramid => {
                let radius = circumradius(n);
                let rise = (1.0 - radius * radius).max(0.0).sqrt();
                let height = if approx_zero(rise) { 1.0 } else { rise };
                let mut points = ring(n, 0.0, 0.0);
                points.push(Point::new(0.0, height, 0.0));
                for k in 0..n {
                    faces.push(vec![k as i64, ni, next(k)]);
                }
                points
            }
        };
        Mesh::build(points, &faces, &[]).unwrap_or_default()
    }
}

/// Platonic seeds without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platonic {
    /// Regular tetrahedron inscribed in the cube `[-1, 1]³`.
    Tetrahedron,
    /// Unit cube `[0, 1]³`.
    Cube,
    /// Octahedron with vertices on the unit axes.
    Octahedron,
}

impl Generator for Platonic {
    fn generate(&self) -> Mesh {
        let (points, faces): (Vec<[f64; 3]>, Vec<Vec<i64>>) = match self {
            Self::Tetrahedron => (
                vec![
                    [1.0, 1.0, 1.0],
                    [1.0, -1.0, -1.0],
                    [-1.0, 1.0, -1.0],
                    [-1.0, -1.0, 1.0],
                ],
                vec![vec![0, 1, 2], vec![0, 3, 1], vec![0, 2, 3], vec![1, 3, 2]],
            ),
            Self::Cube => (
                vec![
                    [0.0, 0.0, 0.0],
                    [1.0, 0.0, 0.0],
                    [1.0, 1.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, 0.0, 1.0],
                    [1.0, 0.0, 1.0],
                    [1.0, 1.0, 1.0],
                    [0.0, 1.0, 1.0],
                ],
                vec![
                    vec![0, 3, 2, 1],
                    vec![4, 5, 6, 7],
                    vec![0, 1, 5, 4],
                    vec![1, 2, 6, 5],
                    vec![2, 3, 7, 6],
                    vec![3, 0, 4, 7],
                ],
            ),
            Self::Octahedron => (
                vec![
                    [1.0, 0.0, 0.0],
                    [-1.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, -1.0, 0.0],
                    [0.0, 0.0, 1.0],
                    [0.0, 0.0, -1.0],
                ],
                vec![
                    vec![0, 2, 4],
                    vec![2, 1, 4],
                    vec![1, 3, 4],
                    vec![3, 0, 4],
                    vec![2, 0, 5],
                    vec![1, 2, 5],
                    vec![3, 1, 5],
                    vec![0, 3, 5],
                ],
            ),
        };
        let points = points.into_iter().map(Point::from_array).collect();
        Mesh::build(points, &faces, &[]).unwrap_or_default()
    }
}

/// Factory for a ring family under `name` (`P#`, `A#`, `Y#`).
pub fn ring_factory(name: &str, kind: RingKind) -> FnFactory<dyn Generator> {
    FnFactory::<dyn Generator>::new(name, &SIDES, move |args: &ParsedArgs| {
        let sides = usize::try_from(args.integer('n')?).ok()?;
        let solid = RingSolid::new(kind, sides)?;
        Some(Box::new(solid))
    })
}

/// Factory for a fixed seed under `name` (`T`, `C`, `O`).
pub fn platonic_factory(name: &str, seed: Platonic) -> FnFactory<dyn Generator> {
    FnFactory::<dyn Generator>::new(name, &[], move |_: &ParsedArgs| Some(Box::new(seed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn outward(mesh: &Mesh) -> bool {
        let center = mesh.centroid().unwrap_or_default();
        mesh.faces()
            .iter()
            .all(|f| f.normal(mesh).dot(f.centroid(mesh) - center) > 0.0)
    }

    #[test]
    fn test_ring_counts() {
        for n in 3..9 {
            let prism = RingSolid::new(RingKind::Prism, n).unwrap().generate();
            assert_eq!(
                (prism.vertex_count(), prism.edge_count(), prism.face_count()),
                (2 * n, 3 * n, n + 2)
            );
            let anti = RingSolid::new(RingKind::Antiprism, n).unwrap().generate();
            assert_eq!(
                (anti.vertex_count(), anti.edge_count(), anti.face_count()),
                (2 * n, 4 * n, 2 * n + 2)
            );
            let pyramid = RingSolid::new(RingKind::Pyramid, n).unwrap().generate();
            assert_eq!(
                (pyramid.vertex_count(), pyramid.edge_count(), pyramid.face_count()),
                (n + 1, 2 * n, n + 1)
            );
            for mesh in [&prism, &anti, &pyramid] {
                assert_eq!(mesh.euler_characteristic(), 2);
                assert!(outward(mesh));
            }
        }
    }

    #[test]
    fn test_unit_edges() {
        for kind in [RingKind::Prism, RingKind::Antiprism] {
            let mesh = RingSolid::new(kind, 5).unwrap().generate();
            for edge in 0..mesh.edge_count() {
                assert_relative_eq!(mesh.edge_length(edge), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_too_few_sides() {
        assert_eq!(RingSolid::new(RingKind::Prism, 2), None);
    }

    #[test]
    fn test_platonic_seeds() {
        for (seed, counts) in [
            (Platonic::Tetrahedron, (4, 6, 4)),
            (Platonic::Cube, (8, 12, 6)),
            (Platonic::Octahedron, (6, 12, 8)),
        ] {
            let mesh = seed.generate();
            assert_eq!(
                (mesh.vertex_count(), mesh.edge_count(), mesh.face_count()),
                counts
            );
            assert!(outward(&mesh), "{seed:?}");
        }
    }
}
