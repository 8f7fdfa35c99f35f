//! Wavefront OBJ support.
//!
//! Only `v`, `f` and `usemtl` statements are interpreted. Face indices are
//! 1-based; negative indices count back from the last vertex read so far and
//! `i/t/n` references use their first field. Face colours travel as material
//! names `rgb_rrggbb`.

use std::io::{BufRead, Write};

use config::constants::OBJ_COLOR_MATERIAL_PREFIX;
use poly_geom::Point;

use super::{check_index, numbered_lines, parse_f64, parse_i64, IoError, IoResult, MeshFormat};
use crate::color::Color;
use crate::mesh::Mesh;

/// OBJ reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obj;

impl MeshFormat for Obj {
    fn read(&self, reader: &mut dyn BufRead) -> IoResult<Mesh> {
        let mut points = Vec::new();
        let mut faces = Vec::new();
        let mut colors = Vec::new();
        let mut current = Color::DEFAULT;

        for (line, text) in numbered_lines(reader)? {
            let mut tokens = text.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let coords = tokens
                        .take(3)
                        .map(|t| parse_f64(t, line))
                        .collect::<IoResult<Vec<f64>>>()?;
                    if coords.len() != 3 {
                        return Err(IoError::invalid_content(line, "expected three coordinates"));
                    }
                    points.push(Point::new(coords[0], coords[1], coords[2]));
                }
                Some("f") => {
                    let face = tokens
                        .map(|t| resolve_index(t, points.len(), line))
                        .collect::<IoResult<Vec<i64>>>()?;
                    if face.is_empty() {
                        return Err(IoError::invalid_content(line, "face without vertices"));
                    }
                    faces.push(face);
                    colors.push(current);
                }
                Some("usemtl") => {
                    current = tokens
                        .next()
                        .and_then(|name| name.strip_prefix(OBJ_COLOR_MATERIAL_PREFIX))
                        .and_then(Color::from_hex)
                        .unwrap_or(Color::DEFAULT);
                }
                _ => {}
            }
        }

        Ok(Mesh::build(points, &faces, &colors)?)
    }

    fn write(&self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()> {
        for vertex in mesh.vertices() {
            let p = vertex.position();
            writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        let mut material: Option<Color> = None;
        for face in mesh.faces() {
            if material != Some(face.color()) {
                writeln!(
                    writer,
                    "usemtl {}{}",
                    OBJ_COLOR_MATERIAL_PREFIX,
                    face.color().to_hex()
                )?;
                material = Some(face.color());
            }
            write!(writer, "f")?;
            for v in face.vertices() {
                write!(writer, " {}", v + 1)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Converts an OBJ face reference to a 0-based index.
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> IoResult<i64> {
    let field = token.split('/').next().unwrap_or_default();
    let raw = parse_i64(field, line)?;
    let index = match raw {
        0 => return Err(IoError::invalid_content(line, "OBJ indices start at 1")),
        r if r > 0 => r - 1,
        r => vertex_count as i64 + r,
    };
    check_index(index, vertex_count, line)
}
