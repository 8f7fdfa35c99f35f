//! Write/read cycles through every mesh file format.

use poly_geom::Point;
use poly_mesh::io::{self, read_str, write_string, Format};
use poly_mesh::{Color, Mesh};

/// Square pyramid with mixed face degrees and colours.
fn pyramid() -> Mesh {
    let points = vec![
        Point::new(-1.0, 0.0, -1.0),
        Point::new(1.0, 0.0, -1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(-1.0, 0.0, 1.0),
        Point::new(0.0, 1.414_213_562_373_095, 0.0),
    ];
    let faces = vec![
        vec![0, 1, 2, 3],
        vec![1, 0, 4],
        vec![2, 1, 4],
        vec![3, 2, 4],
        vec![0, 3, 4],
    ];
    let colors = [
        Color::new(10, 20, 30),
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::WHITE,
    ];
    Mesh::build(points, &faces, &colors).unwrap()
}

fn round_trip(format: Format, mesh: &Mesh) -> Mesh {
    let text = write_string(format, mesh).unwrap();
    read_str(format, &text).unwrap()
}

#[test]
fn test_structure_survives_every_format() {
    let mesh = pyramid();
    for format in [Format::Off, Format::Obj, Format::Table, Format::Raw] {
        let back = round_trip(format, &mesh);
        assert_eq!(back.vertex_count(), mesh.vertex_count(), "{format:?}");
        assert_eq!(back.edge_count(), mesh.edge_count(), "{format:?}");
        assert_eq!(back.face_count(), mesh.face_count(), "{format:?}");
        assert_eq!(back.face_indices(), mesh.face_indices(), "{format:?}");
        assert_eq!(back.positions(), mesh.positions(), "{format:?}");
    }
}

#[test]
fn test_colours_survive_coloured_formats() {
    let mesh = pyramid();
    for format in [Format::Off, Format::Obj, Format::Raw] {
        assert_eq!(
            round_trip(format, &mesh).face_colors(),
            mesh.face_colors(),
            "{format:?}"
        );
    }
}

#[test]
fn test_table_drops_colour() {
    let back = round_trip(Format::Table, &pyramid());
    assert!(back.face_colors().iter().all(|c| *c == Color::DEFAULT));
}

#[test]
fn test_empty_mesh() {
    let mesh = Mesh::new();
    for format in [Format::Off, Format::Obj, Format::Table, Format::Raw] {
        assert!(round_trip(format, &mesh).is_empty(), "{format:?}");
    }
}

#[test]
fn test_save_and_load_by_extension() {
    let dir = std::env::temp_dir().join(format!("poly-mesh-roundtrip-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let mesh = pyramid();
    for format in [Format::Off, Format::Obj, Format::Table, Format::Raw] {
        let path = dir.join(format!("pyramid.{}", format.extension()));
        io::save(&mesh, &path).unwrap();
        let back = io::load(&path).unwrap();
        assert_eq!(back.face_indices(), mesh.face_indices());
    }
    std::fs::remove_dir_all(&dir).unwrap();
}
