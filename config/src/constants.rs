//! # Configuration Constants
//!
//! Centralized constants for the polyhedral notation pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Color**: Default face colour
//! - **Notation**: Marker characters of the chain and path notations
//! - **Formats**: Identifiers written by the mesh file formats

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. Exact checks (such as the zero-determinant test for
/// transform inversion) deliberately do not use it.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when comparing transforms and round-tripped coordinates.
///
/// Trigonometric round trips lose a few ulps per step, so comparisons of
/// derived quantities use this looser bound.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, GEOMETRY_TOLERANCE};
///
/// assert!(GEOMETRY_TOLERANCE > EPSILON);
/// ```
pub const GEOMETRY_TOLERANCE: f64 = 1e-9;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default face colour when none is specified (mid gray).
///
/// RGB values in range [0, 255].
pub const DEFAULT_FACE_COLOR: [u8; 3] = [128, 128, 128];

// =============================================================================
// NOTATION CONSTANTS
// =============================================================================

/// Suffix that marks a factory accepting a leading numeric flag (`T#`).
pub const NUMERIC_WILDCARD: char = '#';

/// Flag name under which a step's numeric argument is injected (`-n 3`).
///
/// A factory that declares this flag receives the number as a parameter;
/// a bare operator without it treats the number as a repeat count.
pub const NUMERIC_FLAG: char = 'n';

/// Modifier allowed directly after a single-letter step name (`t*`).
pub const STAR_MODIFIER: char = '*';

/// Characters that mark a path coordinate as an angle in degrees.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGLE_MARKERS;
///
/// assert!(ANGLE_MARKERS.contains(&'°'));
/// ```
pub const ANGLE_MARKERS: [char; 2] = ['°', '\''];

/// Prefix of a vertex reference in the path notation (`#-1`).
pub const VERTEX_REFERENCE_PREFIX: char = '#';

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Material name prefix used to carry face colours through OBJ files.
///
/// # Example
///
/// ```rust
/// use config::constants::OBJ_COLOR_MATERIAL_PREFIX;
///
/// let material = format!("{}{:02x}{:02x}{:02x}", OBJ_COLOR_MATERIAL_PREFIX, 255, 0, 0);
/// assert_eq!(material, "rgb_ff0000");
/// ```
pub const OBJ_COLOR_MATERIAL_PREFIX: &str = "rgb_";

/// Title written as the first line of coordinate table files.
pub const TABLE_DEFAULT_TITLE: &str = "Polyhedron";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns true if `c` is one of the path notation's angle markers.
///
/// # Example
///
/// ```rust
/// use config::constants::is_angle_marker;
///
/// assert!(is_angle_marker('\''));
/// assert!(!is_angle_marker('d'));
/// ```
#[inline]
pub fn is_angle_marker(c: char) -> bool {
    ANGLE_MARKERS.contains(&c)
}
