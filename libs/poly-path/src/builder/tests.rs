//! Tests for the builder state machine.

use super::*;
use approx::assert_relative_eq;

fn at(x: f64, y: f64, z: f64) -> Target {
    Target::Cartesian(Point::new(x, y, z))
}

#[test]
fn test_new_builder_is_empty() {
    let builder = PathBuilder::new();
    assert_eq!(builder.cursor().position(), Point::ZERO);
    assert_eq!(builder.color(), Color::DEFAULT);
    assert_eq!(builder.current_vertex(), None);
    assert_eq!(builder.open_face(), None);
    assert!(builder.to_mesh().unwrap().is_empty());
}

#[test]
fn test_move_touches_cursor_only() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.move_cursor(at(3.0, 0.0, 0.0), Mode::Absolute).unwrap();
    assert_eq!(builder.vertex_count(), 1);
    assert_eq!(builder.current_vertex(), None);
    assert_eq!(builder.cursor().position(), Point::new(3.0, 0.0, 0.0));

    builder.move_cursor(Target::Vertex(0), Mode::Relative).unwrap();
    assert_eq!(builder.current_vertex(), Some(0));
    assert_eq!(builder.cursor().position(), Point::ZERO);
}

#[test]
fn test_move_keeps_open_face() {
    let mut builder = PathBuilder::new();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.move_cursor(at(0.0, 5.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Absolute).unwrap();
    assert_eq!(builder.open_face(), Some(&[0, 1, 2][..]));
}

#[test]
fn test_continue_without_vertex_creates_start() {
    let mut builder = PathBuilder::new();
    builder.move_cursor(at(2.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Relative).unwrap();
    assert_eq!(builder.positions(), &[Point::new(2.0, 0.0, 0.0), Point::new(2.0, 1.0, 0.0)]);
    assert_eq!(builder.open_face(), Some(&[0, 1][..]));
}

#[test]
fn test_begin_closes_open_face() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Absolute).unwrap();
    // relative to the first vertex the implicit close returned to
    builder.begin(at(0.0, 0.0, 1.0), Mode::Relative).unwrap();
    assert_eq!(builder.face_count(), 1);
    assert_eq!(builder.open_face(), None);
    assert_eq!(builder.positions()[3], Point::new(0.0, 0.0, 1.0));
    assert_eq!(builder.current_vertex(), Some(3));
}

#[test]
fn test_close_without_face_is_noop() {
    let mut builder = PathBuilder::new();
    builder.begin(at(1.0, 1.0, 1.0), Mode::Absolute).unwrap();
    builder.move_cursor(at(5.0, 5.0, 5.0), Mode::Absolute).unwrap();
    builder.close();
    assert_eq!(builder.face_count(), 0);
    assert_eq!(builder.cursor().position(), Point::splat(5.0));
}

#[test]
fn test_bad_reference_leaves_state() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    let err = builder.begin(Target::Vertex(-3), Mode::Absolute).unwrap_err();
    assert_eq!(err, PathError::VertexOutOfRange { index: -3, count: 2 });
    assert_eq!(builder.open_face(), Some(&[0, 1][..]));
    assert_eq!(builder.face_count(), 0);
}

#[test]
fn test_open_face_included_and_degenerate_dropped() {
    let mut builder = PathBuilder::new();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.close();
    builder.begin(at(0.0, 0.0, 1.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 1.0), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 1.0), Mode::Absolute).unwrap();
    let mesh = builder.to_mesh().unwrap();
    assert_eq!(builder.face_count(), 1);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.face(0).vertices(), &[2, 3, 4]);
}

#[test]
fn test_sticky_colour_captured_at_open() {
    let mut builder = PathBuilder::new();
    builder.set_color(Color::RED);
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.set_color(Color::BLUE);
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Absolute).unwrap();
    builder.close();
    let mesh = builder.to_mesh().unwrap();
    assert_eq!(mesh.face(0).color(), Color::RED);
    assert_eq!(builder.color(), Color::BLUE);
}

#[test]
fn test_clear_keeps_cursor_and_colour() {
    let mut builder = PathBuilder::new();
    builder.set_color(Color::GREEN);
    builder.begin(at(1.0, 2.0, 3.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Relative).unwrap();
    builder.clear();
    assert_eq!(builder.vertex_count(), 0);
    assert_eq!(builder.open_face(), None);
    assert_eq!(builder.current_vertex(), None);
    assert_eq!(builder.cursor().position(), Point::new(2.0, 2.0, 3.0));
    assert_eq!(builder.color(), Color::GREEN);
}

#[test]
fn test_relative_cylindrical_turn() {
    let mut builder = PathBuilder::new();
    builder.begin(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder
        .continue_to(Target::Cylindrical(Cylindrical::new(0.0, 0.0, 90.0)), Mode::Relative)
        .unwrap();
    let p = builder.positions()[1];
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_absolute_spherical() {
    let mut builder = PathBuilder::new();
    builder
        .begin(Target::Spherical(Spherical::new(2.0, 0.0, 180.0)), Mode::Absolute)
        .unwrap();
    let p = builder.positions()[0];
    assert_relative_eq!(p.x, -2.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_continue_reference_counts_implicit_start() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.move_cursor(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    // the open creates vertex 1, so -2 names vertex 0
    builder.continue_to(Target::Vertex(-2), Mode::Absolute).unwrap();
    assert_eq!(builder.open_face(), Some(&[1, 0][..]));
    assert_eq!(builder.cursor().position(), Point::ZERO);

    let mut empty = PathBuilder::new();
    empty.continue_to(Target::Vertex(0), Mode::Absolute).unwrap();
    assert_eq!(empty.vertex_count(), 1);
    assert_eq!(empty.face_count(), 1);
    assert_eq!(empty.to_mesh().unwrap().face_count(), 0);
}

#[test]
fn test_continue_bad_reference_leaves_state() {
    let mut builder = PathBuilder::new();
    builder.move_cursor(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    let err = builder.continue_to(Target::Vertex(1), Mode::Absolute).unwrap_err();
    assert_eq!(err, PathError::VertexOutOfRange { index: 1, count: 1 });
    assert_eq!(builder.vertex_count(), 0);
    assert_eq!(builder.open_face(), None);

    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    let err = builder.continue_to(Target::Vertex(-2), Mode::Absolute).unwrap_err();
    assert_eq!(err, PathError::VertexOutOfRange { index: -2, count: 1 });
    assert_eq!(builder.open_face(), None);
}

#[test]
fn test_continue_to_first_vertex_closes() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(Target::Vertex(0), Mode::Absolute).unwrap();
    assert_eq!(builder.open_face(), None);
    assert_eq!(builder.face_count(), 1);
    assert_eq!(builder.current_vertex(), Some(0));
    assert_eq!(builder.to_mesh().unwrap().edge_count(), 3);
}

#[test]
fn test_repeated_vertices_collapse() {
    let mut builder = PathBuilder::new();
    builder.begin(at(0.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(at(1.0, 0.0, 0.0), Mode::Absolute).unwrap();
    builder.continue_to(Target::Vertex(-1), Mode::Absolute).unwrap();
    builder.continue_to(at(0.0, 1.0, 0.0), Mode::Absolute).unwrap();
    assert_eq!(builder.open_face(), Some(&[0, 1, 1, 2][..]));
    let mesh = builder.to_mesh().unwrap();
    assert_eq!(mesh.face(0).vertices(), &[0, 1, 2]);
    assert_eq!(mesh.edge_count(), 3);
}
