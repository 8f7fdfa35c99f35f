//! OFF (Object File Format) support.
//!
//! ```text
//! OFF
//! V F E
//! x y z                 (V lines)
//! n i0 .. in-1 r g b    (F lines, 0-based indices, colour optional)
//! ```
//!
//! Colours are written as 0-255 integers. When reading, a colour whose
//! components contain a decimal point is taken as `[0, 1]` floats; a single
//! trailing value (a colour-map index) is ignored. `#` starts a comment.

use std::io::{BufRead, Write};

use poly_geom::Point;

use super::{check_index, numbered_lines, parse_f64, parse_i64, IoError, IoResult, MeshFormat};
use crate::color::Color;
use crate::mesh::Mesh;

/// OFF reader/writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Off;

impl MeshFormat for Off {
    fn read(&self, reader: &mut dyn BufRead) -> IoResult<Mesh> {
        // Flatten into (line, tokens) with comments and blank lines removed.
        let mut records: Vec<(usize, Vec<String>)> = Vec::new();
        for (line, text) in numbered_lines(reader)? {
            let content = text.split('#').next().unwrap_or_default();
            let tokens: Vec<String> = content.split_whitespace().map(str::to_string).collect();
            if !tokens.is_empty() {
                records.push((line, tokens));
            }
        }
        let mut records = records.into_iter();

        let (header_line, mut header) = records
            .next()
            .ok_or_else(|| IoError::invalid_content(0, "empty file"))?;
        if header[0] != "OFF" {
            return Err(IoError::invalid_content(
                header_line,
                format!("expected 'OFF', found '{}'", header[0]),
            ));
        }
        header.remove(0);
        let (count_line, counts) = if header.is_empty() {
            records
                .next()
                .ok_or_else(|| IoError::invalid_content(header_line, "missing counts"))?
        } else {
            (header_line, header)
        };
        if counts.len() < 2 {
            return Err(IoError::invalid_content(count_line, "expected vertex and face counts"));
        }
        let vertex_count = parse_i64(&counts[0], count_line)?.max(0) as usize;
        let face_count = parse_i64(&counts[1], count_line)?.max(0) as usize;

        let mut points = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let (line, tokens) = records
                .next()
                .ok_or_else(|| IoError::invalid_content(0, "unexpected end of vertex list"))?;
            if tokens.len() < 3 {
                return Err(IoError::invalid_content(line, "expected three coordinates"));
            }
            points.push(Point::new(
                parse_f64(&tokens[0], line)?,
                parse_f64(&tokens[1], line)?,
                parse_f64(&tokens[2], line)?,
            ));
        }

        let mut faces = Vec::with_capacity(face_count);
        let mut colors = Vec::with_capacity(face_count);
        for _ in 0..face_count {
            let (line, tokens) = records
                .next()
                .ok_or_else(|| IoError::invalid_content(0, "unexpected end of face list"))?;
            let degree = parse_i64(&tokens[0], line)?.max(0) as usize;
            if tokens.len() < degree + 1 {
                return Err(IoError::invalid_content(
                    line,
                    format!("face declares {degree} vertices but lists {}", tokens.len() - 1),
                ));
            }
            let face = tokens[1..=degree]
                .iter()
                .map(|t| check_index(parse_i64(t, line)?, vertex_count, line))
                .collect::<IoResult<Vec<i64>>>()?;
            faces.push(face);
            colors.push(parse_color(&tokens[degree + 1..], line)?);
        }

        Ok(Mesh::build(points, &faces, &colors)?)
    }

    fn write(&self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()> {
        writeln!(writer, "OFF")?;
        writeln!(
            writer,
            "{} {} {}",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.edge_count()
        )?;
        for vertex in mesh.vertices() {
            let p = vertex.position();
            writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        }
        for face in mesh.faces() {
            write!(writer, "{}", face.degree())?;
            for v in face.vertices() {
                write!(writer, " {v}")?;
            }
            let c = face.color();
            writeln!(writer, " {} {} {}", c.r, c.g, c.b)?;
        }
        Ok(())
    }
}

/// Colour from the tokens trailing a face's index list.
fn parse_color(tokens: &[String], line: usize) -> IoResult<Color> {
    if tokens.len() < 3 {
        return Ok(Color::DEFAULT);
    }
    let values = tokens[..3]
        .iter()
        .map(|t| parse_f64(t, line))
        .collect::<IoResult<Vec<f64>>>()?;
    if tokens[..3].iter().any(|t| t.contains('.')) {
        Ok(Color::from_unit(values[0], values[1], values[2]))
    } else {
        let byte = |v: f64| v.clamp(0.0, 255.0) as u8;
        Ok(Color::new(byte(values[0]), byte(values[1]), byte(values[2])))
    }
}
