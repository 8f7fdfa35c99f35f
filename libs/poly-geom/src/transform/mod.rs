//! Immutable 3x4 affine transforms.
//!
//! A [`Transform`] stores a 3x3 linear part `M` and a translation `t` and
//! maps `p` to `M·p + t`. Rotation constructors take degrees and go through
//! [`sin_cos_degrees`](crate::angle::sin_cos_degrees), so quarter turns have
//! exact integer coefficients.

use std::ops::Mul;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::angle::sin_cos_degrees;
use crate::error::GeomError;
use crate::vector::Point;

/// Affine transform `p' = M·p + t`.
///
/// # Examples
/// ```
/// use poly_geom::{Point, Transform};
///
/// let t = Transform::translation(Point::new(1.0, 0.0, 0.0))
///     .concatenate(&Transform::scale(2.0));
/// // scale first, then translate
/// assert_eq!(t.transform_point(Point::ONE), Point::new(3.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    linear: DMat3,
    translation: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        linear: DMat3::IDENTITY,
        translation: DVec3::ZERO,
    };

    /// Builds a transform from three rows of `[m0, m1, m2, t]`.
    pub fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        let linear = DMat3::from_cols(
            DVec3::new(rows[0][0], rows[1][0], rows[2][0]),
            DVec3::new(rows[0][1], rows[1][1], rows[2][1]),
            DVec3::new(rows[0][2], rows[1][2], rows[2][2]),
        );
        let translation = DVec3::new(rows[0][3], rows[1][3], rows[2][3]);
        Self { linear, translation }
    }

    /// Builds a transform from a linear part and a translation.
    pub fn from_parts(linear: DMat3, translation: DVec3) -> Self {
        Self { linear, translation }
    }

    /// The twelve coefficients as rows of `[m0, m1, m2, t]`.
    pub fn rows(&self) -> [[f64; 4]; 3] {
        let m = self.linear;
        let t = self.translation;
        [
            [m.x_axis.x, m.y_axis.x, m.z_axis.x, t.x],
            [m.x_axis.y, m.y_axis.y, m.z_axis.y, t.y],
            [m.x_axis.z, m.y_axis.z, m.z_axis.z, t.z],
        ]
    }

    /// Linear (3x3) part.
    #[inline]
    pub fn linear(&self) -> DMat3 {
        self.linear
    }

    /// Translation part.
    #[inline]
    pub fn translation_part(&self) -> DVec3 {
        self.translation
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: Point) -> Self {
        Self {
            linear: DMat3::IDENTITY,
            translation: offset,
        }
    }

    /// Uniform scale about the origin.
    pub fn scale(factor: f64) -> Self {
        Self::scale_xyz(DVec3::splat(factor))
    }

    /// Per-axis scale about the origin.
    pub fn scale_xyz(factors: DVec3) -> Self {
        Self {
            linear: DMat3::from_diagonal(factors),
            translation: DVec3::ZERO,
        }
    }

    /// Rotation about the X axis by `degrees`.
    pub fn rotation_x(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
        ])
    }

    /// Rotation about the Y axis by `degrees`.
    pub fn rotation_y(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
        ])
    }

    /// Rotation about the Z axis by `degrees`.
    pub fn rotation_z(degrees: f64) -> Self {
        let (s, c) = sin_cos_degrees(degrees);
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Rotation about the X axis by `radians`.
    pub fn rotation_x_radians(radians: f64) -> Self {
        Self::rotation_x(radians.to_degrees())
    }

    /// Rotation about the Y axis by `radians`.
    pub fn rotation_y_radians(radians: f64) -> Self {
        Self::rotation_y(radians.to_degrees())
    }

    /// Rotation about the Z axis by `radians`.
    pub fn rotation_z_radians(radians: f64) -> Self {
        Self::rotation_z(radians.to_degrees())
    }

    /// Rotation by `degrees` about an axis through the origin.
    ///
    /// The axis is normalized; a zero axis yields the identity.
    pub fn rotation_axis(axis: Point, degrees: f64) -> Self {
        let u = axis.normalize_or_zero();
        if u == DVec3::ZERO {
            return Self::IDENTITY;
        }
        let (s, c) = sin_cos_degrees(degrees);
        let k = 1.0 - c;
        let (x, y, z) = (u.x, u.y, u.z);
        Self::from_rows([
            [c + x * x * k, x * y * k - z * s, x * z * k + y * s, 0.0],
            [y * x * k + z * s, c + y * y * k, y * z * k - x * s, 0.0],
            [z * x * k - y * s, z * y * k + x * s, c + z * z * k, 0.0],
        ])
    }

    /// Shear: `x += xy·y + xz·z`, `y += yz·z`.
    pub fn shear(xy: f64, xz: f64, yz: f64) -> Self {
        Self::from_rows([
            [1.0, xy, xz, 0.0],
            [0.0, 1.0, yz, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f64 {
        self.linear.determinant()
    }

    /// Inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::NonInvertible`] when the determinant is exactly
    /// zero. Nearly singular transforms are still inverted.
    ///
    /// # Examples
    /// ```
    /// use poly_geom::{Point, Transform};
    ///
    /// assert!(Transform::scale_xyz(Point::new(1.0, 0.0, 1.0)).invert().is_err());
    /// let inv = Transform::translation(Point::X).invert().unwrap();
    /// assert_eq!(inv.transform_point(Point::X), Point::ZERO);
    /// ```
    pub fn invert(&self) -> Result<Self, GeomError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(GeomError::NonInvertible { determinant });
        }
        let linear = self.linear.inverse();
        Ok(Self {
            linear,
            translation: -(linear * self.translation),
        })
    }

    /// Composition that applies `other` first, then `self`.
    pub fn concatenate(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    /// Composition that applies `self` first, then `other`.
    pub fn pre_concatenate(&self, other: &Self) -> Self {
        other.concatenate(self)
    }

    /// Maps a point (linear part plus translation).
    #[inline]
    pub fn transform_point(&self, point: Point) -> Point {
        self.linear * point + self.translation
    }

    /// Maps a direction (linear part only).
    #[inline]
    pub fn transform_vector(&self, vector: Point) -> Point {
        self.linear * vector
    }

    /// True if every coefficient differs from `other`'s by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows()
            .iter()
            .flatten()
            .zip(other.rows().iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// True if this transform is the identity within `tolerance`.
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.approx_eq(&Self::IDENTITY, tolerance)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.concatenate(&rhs)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.transform_point(rhs)
    }
}
