//! Tests for the cursor and its coordinate views.

use super::*;
use approx::assert_relative_eq;

fn assert_point_eq(a: Point, b: Point) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
}

#[test]
fn starts_at_origin() {
    let cursor = Cursor::new();
    assert_eq!(cursor.position(), Point::ZERO);
    assert_eq!(cursor.cylindrical(), Cylindrical::new(0.0, 0.0, 0.0));
    assert_eq!(cursor.spherical(), Spherical::new(0.0, 0.0, 0.0));
}

#[test]
fn cylindrical_quadrant_is_exact() {
    let mut cursor = Cursor::new();
    cursor.set_cylindrical(Cylindrical::new(3.0, -1.0, 180.0));
    assert_eq!(cursor.position(), Point::new(-3.0, -1.0, 0.0));
}

#[test]
fn spherical_pole() {
    let mut cursor = Cursor::new();
    cursor.set_spherical(Spherical::new(2.0, 90.0, 45.0));
    assert_point_eq(cursor.position(), Point::new(0.0, 2.0, 0.0));
    assert_relative_eq!(cursor.spherical().elevation, 90.0, epsilon = 1e-12);
}

#[test]
fn cartesian_reads_back_consistently() {
    let mut cursor = Cursor::new();
    cursor.set_cartesian(Point::new(1.0, 2.0, 1.0));
    let cyl = cursor.cylindrical();
    assert_relative_eq!(cyl.radius, 2f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(cyl.azimuth, 45.0, epsilon = 1e-12);
    assert_eq!(cyl.height, 2.0);
    assert_point_eq(cyl.to_point(), cursor.position());
    assert_point_eq(cursor.spherical().to_point(), cursor.position());
}

#[test]
fn relative_cylindrical_move_rotates() {
    let mut cursor = Cursor::at(Point::new(1.0, 0.0, 0.0));
    cursor.move_cylindrical(Cylindrical::new(0.0, 0.5, 90.0));
    assert_point_eq(cursor.position(), Point::new(0.0, 0.5, 1.0));
}

#[test]
fn relative_spherical_move_extends_radius() {
    let mut cursor = Cursor::at(Point::new(0.0, 0.0, 2.0));
    cursor.move_spherical(Spherical::new(1.0, 0.0, 0.0));
    assert_point_eq(cursor.position(), Point::new(0.0, 0.0, 3.0));
}

#[test]
fn relative_cartesian_move() {
    let mut cursor = Cursor::at(Point::ONE);
    cursor.move_cartesian(Point::new(-1.0, 0.0, 2.0));
    assert_eq!(cursor.position(), Point::new(0.0, 1.0, 3.0));
}

#[test]
fn snapshot_and_restore() {
    let mut cursor = Cursor::at(Point::X);
    let saved = cursor.snapshot();
    cursor.move_cartesian(Point::Y);
    assert_ne!(cursor, saved);
    cursor.restore(&saved);
    assert_eq!(cursor.position(), Point::X);
}
