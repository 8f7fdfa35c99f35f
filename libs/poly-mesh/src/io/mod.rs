//! # Mesh File Formats
//!
//! Readers and writers for the text formats a [`Mesh`] round-trips through:
//!
//! - **OFF** ([`Off`]) - counts header, coordinates, face lists with RGB
//! - **OBJ** ([`Obj`]) - `v`/`f` statements with 1-based indices
//! - **Coordinate table** ([`CoordinateTable`]) - named constants, vertices
//!   built from them, and `{ i, j, k }` faces
//! - **Raw** ([`Raw`]) - bare coordinates, a blank line, bare index lists
//!
//! Floats are written with Rust's shortest round-trip formatting, so vertex
//! positions survive a write/read cycle bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use poly_mesh::io::{Format, read_str, write_string};
//! use poly_mesh::Mesh;
//! use poly_geom::Point;
//!
//! let mesh = Mesh::build(vec![Point::ZERO, Point::X, Point::Y], &[vec![0, 1, 2]], &[]).unwrap();
//! let text = write_string(Format::Off, &mesh).unwrap();
//! let back = read_str(Format::Off, &text).unwrap();
//! assert_eq!(back.face_indices(), mesh.face_indices());
//! ```

mod error;
mod obj;
mod off;
mod raw;
mod table;

pub use error::{IoError, IoResult};
pub use obj::Obj;
pub use off::Off;
pub use raw::Raw;
pub use table::CoordinateTable;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::mesh::Mesh;

// =============================================================================
// FORMAT CONTRACT
// =============================================================================

/// A text mesh format.
pub trait MeshFormat {
    /// Reads one mesh.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidContent`] for malformed input and
    /// [`IoError::Io`] for read failures.
    fn read(&self, reader: &mut dyn BufRead) -> IoResult<Mesh>;

    /// Writes one mesh.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] for write failures.
    fn write(&self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()>;
}

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Object File Format (`.off`).
    Off,
    /// Wavefront OBJ (`.obj`).
    Obj,
    /// Named coordinate table (`.txt`).
    Table,
    /// Raw coordinates and index lists (`.raw`).
    Raw,
}

impl Format {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "obj" => Some(Self::Obj),
            "txt" => Some(Self::Table),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }

    /// Detects the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnknownFormat`] for missing or unknown extensions.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IoError::UnknownFormat {
            extension: extension.to_string(),
        })
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Obj => "obj",
            Self::Table => "txt",
            Self::Raw => "raw",
        }
    }

    fn handler(self) -> Box<dyn MeshFormat> {
        match self {
            Self::Off => Box::new(Off),
            Self::Obj => Box::new(Obj),
            Self::Table => Box::new(CoordinateTable::default()),
            Self::Raw => Box::new(Raw),
        }
    }

    /// Reads a mesh in this format.
    ///
    /// # Errors
    ///
    /// See [`MeshFormat::read`].
    pub fn read(self, reader: &mut dyn BufRead) -> IoResult<Mesh> {
        let mesh = self.handler().read(reader)?;
        debug!(
            format = ?self,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "read mesh"
        );
        Ok(mesh)
    }

    /// Writes a mesh in this format.
    ///
    /// # Errors
    ///
    /// See [`MeshFormat::write`].
    pub fn write(self, mesh: &Mesh, writer: &mut dyn Write) -> IoResult<()> {
        debug!(
            format = ?self,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "writing mesh"
        );
        self.handler().write(mesh, writer)
    }
}

// =============================================================================
// CONVENIENCE
// =============================================================================

/// Reads a mesh from a string.
///
/// # Errors
///
/// See [`MeshFormat::read`].
pub fn read_str(format: Format, text: &str) -> IoResult<Mesh> {
    let mut reader = text.as_bytes();
    format.read(&mut reader)
}

/// Writes a mesh to a string.
///
/// # Errors
///
/// See [`MeshFormat::write`].
pub fn write_string(format: Format, mesh: &Mesh) -> IoResult<String> {
    let mut buffer = Vec::new();
    format.write(mesh, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Loads a mesh, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`IoError::UnknownFormat`], [`IoError::FileNotFound`] or any
/// error of the format's reader.
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<Mesh> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);
    format.read(&mut reader)
}

/// Saves a mesh, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`IoError::UnknownFormat`] or [`IoError::Io`].
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    format.write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// SHARED PARSING HELPERS
// =============================================================================

/// Reads all lines, numbering them from 1.
fn numbered_lines(reader: &mut dyn BufRead) -> IoResult<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        lines.push((i + 1, line?));
    }
    Ok(lines)
}

/// Parses a float field, reporting the line on failure.
fn parse_f64(text: &str, line: usize) -> IoResult<f64> {
    text.parse::<f64>()
        .map_err(|_| IoError::invalid_content(line, format!("invalid number '{text}'")))
}

/// Parses an integer field, reporting the line on failure.
fn parse_i64(text: &str, line: usize) -> IoResult<i64> {
    text.parse::<i64>()
        .map_err(|_| IoError::invalid_content(line, format!("invalid index '{text}'")))
}

/// Checks that 0-based indices fit the vertex count.
fn check_index(index: i64, vertex_count: usize, line: usize) -> IoResult<i64> {
    if index < 0 || index as usize >= vertex_count {
        return Err(IoError::invalid_content(
            line,
            format!("vertex index {index} out of range (0..{vertex_count})"),
        ));
    }
    Ok(index)
}
