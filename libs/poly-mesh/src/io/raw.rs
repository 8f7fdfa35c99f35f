//! Raw coordinate/index format.
//!
//! ```text
//! 0 0 0
//! 1 0 0
//! 0 1 0
//!
//! 0 1 2 #ff0000
//! ```
//!
//! One vertex per line, a blank line, then one face per line as 0-based
//! indices with an optional trailing `#rrggbb` colour.

use std::io::{BufRead, Write};

use poly_geom::Point;

use super::{check_index, numbered_lines, parse_f64, parse_i64, IoError, IoResult, MeshFormat};
use crate::color::Color;
use crate::mesh::Mesh;

/// Raw reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl MeshFormat for Raw {
    fn read(&self, reader: &mut dyn BufRead) -> IoResult<Mesh> {
        let lines = numbered_lines(reader)?;
        let mut lines = lines.into_iter().skip_while(|(_, t)| t.trim().is_empty());

        let mut points = Vec::new();
        for (line, text) in lines.by_ref() {
            let tokens: Vec<&str> = text.split_whitespace().collect();
            if tokens.is_empty() {
                break;
            }
            if tokens.len() != 3 {
                return Err(IoError::invalid_content(line, "expected three coordinates"));
            }
            points.push(Point::new(
                parse_f64(tokens[0], line)?,
                parse_f64(tokens[1], line)?,
                parse_f64(tokens[2], line)?,
            ));
        }

        let mut faces = Vec::new();
        let mut colors = Vec::new();
        for (line, text) in lines {
            let (indices, color) = match text.split_once('#') {
                Some((indices, hex)) => {
                    let color = Color::from_hex(hex.trim()).ok_or_else(|| {
                        IoError::invalid_content(line, format!("invalid colour '#{}'", hex.trim()))
                    })?;
                    (indices, color)
                }
                None => (text.as_str(), Color::DEFAULT),
            };
            let face = indices
                .split_whitespace()
                .map(|t| check_index(parse_i64(t, line)?, points.len(), line))
                .collect::<IoResult<Vec<i64>>>()?;
            if face.is_empty() {
                continue;
            }
            faces.push(face);
            colors.push(color);
        }

        Ok(Mesh::build(points, &faces, &colors)?)
    }

    fn write(&self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()> {
        for vertex in mesh.vertices() {
            let p = vertex.position();
            writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(writer)?;
        for face in mesh.faces() {
            let list: Vec<String> = face.vertices().iter().map(|v| v.to_string()).collect();
            writeln!(writer, "{} {}", list.join(" "), face.color())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{read_str, write_string, Format};

    #[test]
    fn test_read_with_and_without_colour() {
        let text = "0 0 0\n1 0 0\n0 1 0\n0 0 1\n\n0 1 2 #ff0000\n0 1 3\n";
        let mesh = read_str(Format::Raw, text).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.face(0).color(), Color::RED);
        assert_eq!(mesh.face(1).color(), Color::DEFAULT);
    }

    #[test]
    fn test_points_only() {
        let mesh = read_str(Format::Raw, "0 0 0\n1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_bad_colour() {
        let err = read_str(Format::Raw, "0 0 0\n\n0 0 0 #zz\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { line: 3, .. }));
    }

    #[test]
    fn test_write_layout() {
        let mesh = Mesh::build(
            vec![Point::ZERO, Point::X, Point::Y],
            &[vec![0, 1, 2]],
            &[Color::BLUE],
        )
        .unwrap();
        let text = write_string(Format::Raw, &mesh).unwrap();
        assert_eq!(text, "0 0 0\n1 0 0\n0 1 0\n\n0 1 2 #0000ff\n");
    }
}
