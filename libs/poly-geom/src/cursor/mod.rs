//! # Cursor
//!
//! Positional state of the path builder. The position is stored once, in
//! Cartesian form; cylindrical and spherical coordinates are derived on
//! every read, so all three views always describe the same point.
//!
//! Both curvilinear systems use Y as the polar axis and measure azimuth
//! from +X towards +Z, in degrees:
//!
//! ```text
//! cylindrical (r, h, az):  x = r·cos(az)          y = h          z = r·sin(az)
//! spherical  (r, el, az):  x = r·cos(el)·cos(az)  y = r·sin(el)  z = r·cos(el)·sin(az)
//! ```

use serde::{Deserialize, Serialize};

use crate::angle::{atan2_degrees, sin_cos_degrees};
use crate::vector::Point;

// =============================================================================
// COORDINATE VALUES
// =============================================================================

/// Cylindrical coordinates around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cylindrical {
    /// Distance from the Y axis.
    pub radius: f64,
    /// Height along Y.
    pub height: f64,
    /// Azimuth in degrees.
    pub azimuth: f64,
}

impl Cylindrical {
    /// Creates cylindrical coordinates.
    pub const fn new(radius: f64, height: f64, azimuth: f64) -> Self {
        Self {
            radius,
            height,
            azimuth,
        }
    }

    /// Derives cylindrical coordinates of a Cartesian point.
    pub fn from_point(p: Point) -> Self {
        Self {
            radius: p.x.hypot(p.z),
            height: p.y,
            azimuth: atan2_degrees(p.z, p.x),
        }
    }

    /// Projects back to Cartesian.
    pub fn to_point(self) -> Point {
        let (s, c) = sin_cos_degrees(self.azimuth);
        Point::new(self.radius * c, self.height, self.radius * s)
    }
}

/// Spherical coordinates with Y as the polar axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f64,
    /// Elevation above the XZ plane in degrees.
    pub elevation: f64,
    /// Azimuth in degrees.
    pub azimuth: f64,
}

impl Spherical {
    /// Creates spherical coordinates.
    pub const fn new(radius: f64, elevation: f64, azimuth: f64) -> Self {
        Self {
            radius,
            elevation,
            azimuth,
        }
    }

    /// Derives spherical coordinates of a Cartesian point.
    pub fn from_point(p: Point) -> Self {
        let horizontal = p.x.hypot(p.z);
        Self {
            radius: p.length(),
            elevation: atan2_degrees(p.y, horizontal),
            azimuth: atan2_degrees(p.z, p.x),
        }
    }

    /// Projects back to Cartesian.
    pub fn to_point(self) -> Point {
        let (sin_el, cos_el) = sin_cos_degrees(self.elevation);
        let (sin_az, cos_az) = sin_cos_degrees(self.azimuth);
        let horizontal = self.radius * cos_el;
        Point::new(horizontal * cos_az, self.radius * sin_el, horizontal * sin_az)
    }
}

// =============================================================================
// CURSOR
// =============================================================================

/// Mutable position readable in three coordinate systems.
///
/// `Cursor` is `Copy`: a snapshot is a plain copy and [`Cursor::restore`]
/// rewinds to it.
///
/// # Example
///
/// ```rust
/// use poly_geom::{Cursor, Cylindrical, Point};
///
/// let mut cursor = Cursor::new();
/// cursor.set_cylindrical(Cylindrical::new(2.0, 1.0, 90.0));
/// assert_eq!(cursor.position(), Point::new(0.0, 1.0, 2.0));
/// assert_eq!(cursor.cylindrical().azimuth, 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cursor {
    position: Point,
}

impl Cursor {
    /// Creates a cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor at `position`.
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    /// Cartesian position.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Cylindrical view of the position.
    pub fn cylindrical(&self) -> Cylindrical {
        Cylindrical::from_point(self.position)
    }

    /// Spherical view of the position.
    pub fn spherical(&self) -> Spherical {
        Spherical::from_point(self.position)
    }

    /// Moves to an absolute Cartesian position.
    pub fn set_cartesian(&mut self, position: Point) {
        self.position = position;
    }

    /// Moves to absolute cylindrical coordinates.
    pub fn set_cylindrical(&mut self, coords: Cylindrical) {
        self.position = coords.to_point();
    }

    /// Moves to absolute spherical coordinates.
    pub fn set_spherical(&mut self, coords: Spherical) {
        self.position = coords.to_point();
    }

    /// Moves by a Cartesian delta.
    pub fn move_cartesian(&mut self, delta: Point) {
        self.position += delta;
    }

    /// Adds a delta to each cylindrical coordinate and re-projects.
    pub fn move_cylindrical(&mut self, delta: Cylindrical) {
        let current = self.cylindrical();
        self.set_cylindrical(Cylindrical::new(
            current.radius + delta.radius,
            current.height + delta.height,
            current.azimuth + delta.azimuth,
        ));
    }

    /// Adds a delta to each spherical coordinate and re-projects.
    pub fn move_spherical(&mut self, delta: Spherical) {
        let current = self.spherical();
        self.set_spherical(Spherical::new(
            current.radius + delta.radius,
            current.elevation + delta.elevation,
            current.azimuth + delta.azimuth,
        ));
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Cursor {
        *self
    }

    /// Rewinds to a previously taken snapshot.
    pub fn restore(&mut self, snapshot: &Cursor) {
        *self = *snapshot;
    }
}

#[cfg(test)]
mod tests;
