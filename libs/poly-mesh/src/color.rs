//! # Face Colour
//!
//! 8-bit RGB colour attached to every face.
//!
//! ## Accepted text
//!
//! - `#rrggbb` and `#rgb` hex
//! - decimal triples `255,0,0` / `255 0 0`
//! - fractional triples `1,0.5,0` (all components ≤ 1, at least one with a
//!   decimal point)
//! - a small set of common names (`red`, `navy`, `gray`, ...)

use std::fmt;
use std::str::FromStr;

use config::constants::DEFAULT_FACE_COLOR;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// RGB colour with one byte per channel.
///
/// # Example
///
/// ```rust
/// use poly_mesh::Color;
///
/// let c: Color = "#ff8000".parse().unwrap();
/// assert_eq!(c, Color::new(255, 128, 0));
/// assert_eq!(c.to_string(), "#ff8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("silver", Color::new(192, 192, 192)),
    ("red", Color::new(255, 0, 0)),
    ("maroon", Color::new(128, 0, 0)),
    ("green", Color::new(0, 128, 0)),
    ("lime", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("navy", Color::new(0, 0, 128)),
    ("yellow", Color::new(255, 255, 0)),
    ("olive", Color::new(128, 128, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("teal", Color::new(0, 128, 128)),
    ("magenta", Color::new(255, 0, 255)),
    ("purple", Color::new(128, 0, 128)),
    ("orange", Color::new(255, 165, 0)),
    ("brown", Color::new(165, 42, 42)),
    ("pink", Color::new(255, 192, 203)),
    ("gold", Color::new(255, 215, 0)),
];

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Color {
    /// Face colour used when none is given.
    pub const DEFAULT: Self = Self::new(
        DEFAULT_FACE_COLOR[0],
        DEFAULT_FACE_COLOR[1],
        DEFAULT_FACE_COLOR[2],
    );
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 128, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Creates a colour from bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from components in `[0, 1]` (clamped, rounded).
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Components scaled to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Lower-case `rrggbb` without the leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Looks up one of the built-in colour names (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, c)| *c)
    }

    /// Parses a hex string without the `#` (`rrggbb` or `rgb`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Parses any accepted colour notation.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownColor`] when the text is not a hex code,
    /// a numeric triple or a built-in name.
    pub fn parse(text: &str) -> Result<Self, MeshError> {
        let trimmed = text.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| MeshError::unknown_color(text));
        }
        if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Self::parse_triple(trimmed).ok_or_else(|| MeshError::unknown_color(text));
        }
        Self::from_name(trimmed).ok_or_else(|| MeshError::unknown_color(text))
    }

    fn parse_triple(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != 3 {
            return None;
        }
        let values = parts
            .iter()
            .map(|p| p.parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()?;
        let fractional = parts.iter().any(|p| p.contains('.')) && values.iter().all(|v| *v <= 1.0);
        if fractional {
            return Some(Self::from_unit(values[0], values[1], values[2]));
        }
        if values.iter().any(|v| *v < 0.0 || *v > 255.0 || v.fract() != 0.0) {
            return None;
        }
        Some(Self::new(values[0] as u8, values[1] as u8, values[2] as u8))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
