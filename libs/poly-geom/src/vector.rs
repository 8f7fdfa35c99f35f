//! Point/vector algebra.
//!
//! Points are plain `glam::DVec3` values. Arithmetic, `dot`, `cross`,
//! `length` and `distance` come from glam; the helpers here add the
//! degree/radian angle, midpoint and the aggregates over point sets.

pub use glam::DVec3 as Point;

/// Angle between two vectors in radians, via the dot-product identity.
///
/// Returns `0` when either vector has zero length.
///
/// # Examples
/// ```
/// use poly_geom::vector::{angle_radians, Point};
///
/// let a = angle_radians(Point::X, Point::Y);
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle_radians(a: Point, b: Point) -> f64 {
    let denominator = a.length() * b.length();
    if denominator == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos()
}

/// Angle between two vectors in degrees.
pub fn angle_degrees(a: Point, b: Point) -> f64 {
    angle_radians(a, b).to_degrees()
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).length()
}

/// Unit vector in the direction of `v`, or zero for the zero vector.
pub fn normalize(v: Point) -> Point {
    v.normalize_or_zero()
}

/// Average of a set of points.
///
/// # Examples
/// ```
/// use poly_geom::vector::{average, Point};
///
/// let centre = average(&[Point::ZERO, Point::new(2.0, 4.0, 6.0)]);
/// assert_eq!(centre, Some(Point::new(1.0, 2.0, 3.0)));
/// assert_eq!(average(&[]), None);
/// ```
pub fn average(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Component-wise minimum of a set of points.
pub fn min_by_coordinate(points: &[Point]) -> Option<Point> {
    points.iter().copied().reduce(Point::min)
}

/// Component-wise maximum of a set of points.
pub fn max_by_coordinate(points: &[Point]) -> Option<Point> {
    points.iter().copied().reduce(Point::max)
}

/// Point with the smallest magnitude; the first one wins ties.
pub fn min_by_magnitude(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .copied()
        .reduce(|best, p| if p.length() < best.length() { p } else { best })
}

/// Point with the largest magnitude; the first one wins ties.
pub fn max_by_magnitude(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .copied()
        .reduce(|best, p| if p.length() > best.length() { p } else { best })
}
