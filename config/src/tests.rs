//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_geometry_tolerance_larger_than_epsilon() {
    assert!(
        GEOMETRY_TOLERANCE >= EPSILON,
        "GEOMETRY_TOLERANCE should be >= EPSILON"
    );
}

// =============================================================================
// NOTATION TESTS
// =============================================================================

#[test]
fn test_wildcard_differs_from_star() {
    assert_ne!(NUMERIC_WILDCARD, STAR_MODIFIER);
}

#[test]
fn test_angle_markers() {
    assert!(is_angle_marker('°'));
    assert!(is_angle_marker('\''));
    assert!(!is_angle_marker('#'));
    assert!(!is_angle_marker('0'));
}

#[test]
fn test_default_face_color_is_gray() {
    let [r, g, b] = DEFAULT_FACE_COLOR;
    assert_eq!(r, g);
    assert_eq!(g, b);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
}

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
