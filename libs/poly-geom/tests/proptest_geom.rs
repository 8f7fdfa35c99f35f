//! Property-based tests for the geometry kernel using the `proptest` crate.

use proptest::prelude::*;

use poly_geom::{Cursor, Cylindrical, Point, Spherical, Transform};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary 3D coordinate tuple in a reasonable floating-point range.
fn arb_point() -> impl Strategy<Value = Point> {
    (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
        .prop_map(|(x, y, z)| Point::new(x, y, z))
}

/// Arbitrary angle in degrees.
fn arb_degrees() -> impl Strategy<Value = f64> {
    -360.0f64..360.0
}

/// Arbitrary invertible transform built from well-conditioned factors.
fn arb_transform() -> impl Strategy<Value = Transform> {
    (
        arb_point(),
        arb_point(),
        arb_degrees(),
        0.25f64..4.0,
        -2.0f64..2.0,
    )
        .prop_map(|(offset, axis, degrees, scale, shear)| {
            Transform::translation(offset)
                .concatenate(&Transform::rotation_axis(axis, degrees))
                .concatenate(&Transform::scale(scale))
                .concatenate(&Transform::shear(shear, 0.0, -shear))
        })
}

const TOL: f64 = 1e-6;

fn close(a: Point, b: Point) -> bool {
    (a - b).length() < TOL
}

// ---------------------------------------------------------------------------
// 1. Inverse composes to the identity on both sides
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn inverse_concatenates_to_identity(t in arb_transform()) {
        let inv = t.invert().unwrap();
        prop_assert!(inv.concatenate(&t).is_identity(TOL));
        prop_assert!(t.concatenate(&inv).is_identity(TOL));
    }
}

// ---------------------------------------------------------------------------
// 2. Cartesian -> cylindrical/spherical -> Cartesian round trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cartesian_round_trips_through_curvilinear(p in arb_point()) {
        let mut cursor = Cursor::new();
        cursor.set_cartesian(p);
        prop_assert!(close(cursor.cylindrical().to_point(), p));
        prop_assert!(close(cursor.spherical().to_point(), p));
    }
}

// ---------------------------------------------------------------------------
// 3. Cylindrical/spherical -> Cartesian -> cylindrical/spherical
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cylindrical_round_trips_through_cartesian(
        radius in 0.01f64..100.0,
        height in -100.0f64..100.0,
        azimuth in -179.0f64..179.0,
    ) {
        let mut cursor = Cursor::new();
        cursor.set_cylindrical(Cylindrical::new(radius, height, azimuth));
        let back = cursor.cylindrical();
        prop_assert!((back.radius - radius).abs() < TOL);
        prop_assert!((back.height - height).abs() < TOL);
        prop_assert!((back.azimuth - azimuth).abs() < TOL);
    }
}

proptest! {
    #[test]
    fn spherical_round_trips_through_cartesian(
        radius in 0.01f64..100.0,
        elevation in -89.0f64..89.0,
        azimuth in -179.0f64..179.0,
    ) {
        let mut cursor = Cursor::new();
        cursor.set_spherical(Spherical::new(radius, elevation, azimuth));
        let back = cursor.spherical();
        prop_assert!((back.radius - radius).abs() < TOL);
        prop_assert!((back.elevation - elevation).abs() < TOL);
        prop_assert!((back.azimuth - azimuth).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 4. Transforms compose like function application
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn concatenate_applies_right_operand_first(
        a in arb_transform(),
        b in arb_transform(),
        p in arb_point(),
    ) {
        let composed = a.concatenate(&b).transform_point(p);
        let stepwise = a.transform_point(b.transform_point(p));
        prop_assert!((composed - stepwise).length() < 1e-6 * (1.0 + stepwise.length()));
    }
}
