//! Named coordinate table support.
//!
//! ```text
//! Cube
//!
//! C0 = 0.5
//! C1 = 1.618033988749895 = (1 + sqrt(5)) / 2
//!
//! V0 = ( C0, -C0,  0.0)
//! V1 = (-C1,  C0,   C0)
//!
//! Faces:
//! { 0, 1, 2 }
//! ```
//!
//! Constant lines may carry trailing `= expression` text, which is ignored.
//! Vertex components are a constant name, a negated constant name, or a
//! literal number. The format has no colour; faces read back as the default
//! colour.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use config::constants::TABLE_DEFAULT_TITLE;
use poly_geom::Point;

use super::{check_index, numbered_lines, parse_f64, parse_i64, IoError, IoResult, MeshFormat};
use crate::mesh::Mesh;

/// Coordinate table reader/writer.
#[derive(Debug, Clone)]
pub struct CoordinateTable {
    /// Title line written first.
    pub title: String,
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self {
            title: TABLE_DEFAULT_TITLE.to_string(),
        }
    }
}

impl CoordinateTable {
    /// Creates a writer with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// `C12` / `V3` style name: a prefix letter followed by digits.
fn numbered_name(text: &str, prefix: char) -> Option<usize> {
    text.strip_prefix(prefix)?.parse().ok()
}

impl MeshFormat for CoordinateTable {
    fn read(&self, reader: &mut dyn BufRead) -> IoResult<Mesh> {
        let mut constants: HashMap<String, f64> = HashMap::new();
        let mut vertices: Vec<(usize, Point)> = Vec::new();
        let mut face_lines: Vec<(usize, String)> = Vec::new();
        let mut in_faces = false;

        for (line, text) in numbered_lines(reader)? {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if in_faces {
                face_lines.push((line, trimmed.to_string()));
                continue;
            }
            if trimmed.eq_ignore_ascii_case("faces:") {
                in_faces = true;
                continue;
            }
            let Some((name, rest)) = trimmed.split_once('=') else {
                // title or free text
                continue;
            };
            let name = name.trim();
            if numbered_name(name, 'C').is_some() {
                let value = rest.split('=').next().unwrap_or_default().trim();
                constants.insert(name.to_string(), parse_f64(value, line)?);
            } else if let Some(index) = numbered_name(name, 'V') {
                let inner = rest
                    .trim()
                    .strip_prefix('(')
                    .and_then(|r| r.strip_suffix(')'))
                    .ok_or_else(|| IoError::invalid_content(line, "expected '( x, y, z )'"))?;
                let coords = inner
                    .split(',')
                    .map(|c| component(c.trim(), &constants, line))
                    .collect::<IoResult<Vec<f64>>>()?;
                if coords.len() != 3 {
                    return Err(IoError::invalid_content(line, "expected three components"));
                }
                vertices.push((index, Point::new(coords[0], coords[1], coords[2])));
            }
        }

        vertices.sort_by_key(|(index, _)| *index);
        for (expected, (index, _)) in vertices.iter().enumerate() {
            if *index != expected {
                return Err(IoError::invalid_content(
                    0,
                    format!("vertex V{expected} is missing"),
                ));
            }
        }
        let points: Vec<Point> = vertices.into_iter().map(|(_, p)| p).collect();

        let mut faces = Vec::with_capacity(face_lines.len());
        for (line, text) in face_lines {
            let inner = text
                .strip_prefix('{')
                .and_then(|r| r.strip_suffix('}'))
                .ok_or_else(|| IoError::invalid_content(line, "expected '{ i, j, k }'"))?;
            let face = inner
                .split(',')
                .map(|t| check_index(parse_i64(t.trim(), line)?, points.len(), line))
                .collect::<IoResult<Vec<i64>>>()?;
            faces.push(face);
        }

        Ok(Mesh::build(points, &faces, &[])?)
    }

    fn write(&self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()> {
        // Each distinct non-zero magnitude becomes one constant.
        let mut names: HashMap<u64, usize> = HashMap::new();
        let mut values: Vec<f64> = Vec::new();
        for vertex in mesh.vertices() {
            for value in vertex.position().to_array() {
                let magnitude = value.abs();
                if magnitude != 0.0 && !names.contains_key(&magnitude.to_bits()) {
                    names.insert(magnitude.to_bits(), values.len());
                    values.push(magnitude);
                }
            }
        }

        writeln!(writer, "{}", self.title)?;
        writeln!(writer)?;
        for (i, value) in values.iter().enumerate() {
            writeln!(writer, "C{i} = {value}")?;
        }
        if !values.is_empty() {
            writeln!(writer)?;
        }

        let render = |value: f64| -> String {
            if value == 0.0 {
                return "0.0".to_string();
            }
            let index = names.get(&value.abs().to_bits()).copied().unwrap_or_default();
            if value < 0.0 {
                format!("-C{index}")
            } else {
                format!(" C{index}")
            }
        };
        for vertex in mesh.vertices() {
            let p = vertex.position();
            writeln!(
                writer,
                "V{} = ({}, {}, {})",
                vertex.index(),
                render(p.x),
                render(p.y),
                render(p.z)
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Faces:")?;
        for face in mesh.faces() {
            let list: Vec<String> = face.vertices().iter().map(|v| v.to_string()).collect();
            writeln!(writer, "{{ {} }}", list.join(", "))?;
        }
        Ok(())
    }
}

/// One vertex component: `C3`, `-C3`, or a literal.
fn component(text: &str, constants: &HashMap<String, f64>, line: usize) -> IoResult<f64> {
    let (negative, name) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim()),
        None => (false, text.strip_prefix('+').unwrap_or(text).trim()),
    };
    if numbered_name(name, 'C').is_some() {
        let value = constants
            .get(name)
            .copied()
            .ok_or_else(|| IoError::invalid_content(line, format!("undefined constant {name}")))?;
        return Ok(if negative { -value } else { value });
    }
    parse_f64(text, line)
}
