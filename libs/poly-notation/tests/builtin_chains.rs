//! End-to-end chains against the built-in registry.

use approx::assert_relative_eq;
use poly_geom::Point;
use poly_mesh::Color;
use poly_notation::{builtins, compile, NotationError};

#[test]
fn test_ring_generators_take_numeric_argument() {
    let registry = builtins::registry();
    assert_eq!(registry.compile("P5").unwrap().run().face_count(), 7);
    assert_eq!(registry.compile("A4").unwrap().run().edge_count(), 16);
    assert_eq!(registry.compile("Y3").unwrap().run().vertex_count(), 4);
}

#[test]
fn test_ring_generators_reject_bad_sides() {
    let registry = builtins::registry();
    assert!(matches!(
        registry.compile("P2"),
        Err(NotationError::InvalidParameters { name, .. }) if name == "P#"
    ));
    assert!(matches!(
        registry.compile("P2,5"),
        Err(NotationError::InvalidParameters { .. })
    ));
    assert!(matches!(
        registry.compile("P"),
        Err(NotationError::UnknownName { name }) if name == "P"
    ));
}

#[test]
fn test_operator_chain_order() {
    // move first, then scale: (1 + 1) * 3
    let mesh = compile(builtins::registry(), "(scale){-f 3}(move){-x 1}C")
        .unwrap()
        .run();
    let (min, max) = mesh.bounding_box().unwrap();
    assert_eq!(min, Point::new(3.0, 0.0, 0.0));
    assert_eq!(max, Point::new(6.0, 3.0, 3.0));
}

#[test]
fn test_repeat_count_on_builtin_operator() {
    let registry = builtins::registry();
    let twice = registry.compile("r2C").unwrap().run();
    let plain = registry.compile("C").unwrap().run();
    assert_eq!(twice, plain);
    let once = registry.compile("rC").unwrap().run();
    assert_eq!(once.bounding_box().map(|b| b.0.x), Some(-1.0));
}

#[test]
fn test_color_and_rotate() {
    let mesh = builtins::registry()
        .compile(r#"(color){"0.0 0.0 1.0"} (rotate){-y 90} T"#)
        .unwrap()
        .run();
    assert!(mesh.face_colors().iter().all(|c| *c == Color::BLUE));
    let p = mesh.position(0);
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, -1.0, epsilon = 1e-12);
}

#[test]
fn test_catalog_contents() {
    let registry = builtins::registry();
    let generators: Vec<&str> = registry.generator_names().collect();
    assert_eq!(generators, vec!["A#", "C", "O", "P#", "T", "Y#"]);
    let operators: Vec<&str> = registry.operator_names().collect();
    assert_eq!(operators, vec!["color", "move", "r", "rotate", "scale"]);
}
