//! Degree-based trigonometry.
//!
//! Quadrant angles (multiples of 90°) return exact `0`, `1` and `-1` so that
//! lattice-aligned rotations and cursor moves stay on the lattice.

/// Returns `(sin, cos)` of an angle given in degrees.
///
/// # Examples
/// ```
/// use poly_geom::angle::sin_cos_degrees;
///
/// assert_eq!(sin_cos_degrees(90.0), (1.0, 0.0));
/// assert_eq!(sin_cos_degrees(-180.0), (0.0, -1.0));
/// ```
pub fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let turned = degrees.rem_euclid(360.0);
    if turned == 0.0 {
        (0.0, 1.0)
    } else if turned == 90.0 {
        (1.0, 0.0)
    } else if turned == 180.0 {
        (0.0, -1.0)
    } else if turned == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees.to_radians().sin_cos()
    }
}

/// Arc tangent of `y / x` in degrees, `0` when both are zero.
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        0.0
    } else {
        y.atan2(x).to_degrees()
    }
}
