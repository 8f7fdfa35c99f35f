//! Affine, colour and reflection operators.

use poly_geom::{Point, Transform};
use poly_mesh::{Color, Mesh};

use crate::factory::{FnFactory, Operator};
use crate::options::{OptionSpec, ParsedArgs};

const AXES: [OptionSpec; 3] = [
    OptionSpec::value('x'),
    OptionSpec::value('y'),
    OptionSpec::value('z'),
];

const SCALE: [OptionSpec; 4] = [
    OptionSpec::value('f'),
    OptionSpec::value('x'),
    OptionSpec::value('y'),
    OptionSpec::value('z'),
];

/// Applies a fixed transform to every vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOperator(pub Transform);

impl Operator for TransformOperator {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        mesh.transform(Some(&self.0))
    }
}

/// Paints every face one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint(pub Color);

impl Operator for Paint {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        mesh.recolored(self.0)
    }
}

/// Mirrors in the YZ plane, reversing windings so faces keep facing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reflect;

impl Operator for Reflect {
    fn apply(&self, mesh: &Mesh) -> Mesh {
        let mirror = Transform::scale_xyz(Point::new(-1.0, 1.0, 1.0));
        mesh.transform(Some(&mirror)).reversed()
    }
}

/// Per-axis values with a shared default.
fn axes(args: &ParsedArgs, default: f64) -> Option<Point> {
    Some(Point::new(
        args.number_or('x', default)?,
        args.number_or('y', default)?,
        args.number_or('z', default)?,
    ))
}

/// `(scale)`: `-f factor` or per-axis `-x/-y/-z`.
pub fn scale_factory() -> FnFactory<dyn Operator> {
    FnFactory::<dyn Operator>::new("scale", &SCALE, |args: &ParsedArgs| {
        let transform = if args.has('f') {
            Transform::scale(args.number('f')?)
        } else {
            Transform::scale_xyz(axes(args, 1.0)?)
        };
        Some(Box::new(TransformOperator(transform)))
    })
}

/// `(rotate)`: degrees about X, then Y, then Z.
pub fn rotate_factory() -> FnFactory<dyn Operator> {
    FnFactory::<dyn Operator>::new("rotate", &AXES, |args: &ParsedArgs| {
        let degrees = axes(args, 0.0)?;
        let transform = Transform::rotation_z(degrees.z)
            .concatenate(&Transform::rotation_y(degrees.y))
            .concatenate(&Transform::rotation_x(degrees.x));
        Some(Box::new(TransformOperator(transform)))
    })
}

/// `(move)`: offsets along each axis.
pub fn move_factory() -> FnFactory<dyn Operator> {
    FnFactory::<dyn Operator>::new("move", &AXES, |args: &ParsedArgs| {
        Some(Box::new(TransformOperator(Transform::translation(axes(
            args, 0.0,
        )?))))
    })
}

/// `(color)`: positional colour text, e.g. `(color){red}` or
/// `(color){255,128,0}`.
pub fn color_factory() -> FnFactory<dyn Operator> {
    FnFactory::<dyn Operator>::new("color", &[], |args: &ParsedArgs| {
        if args.positional().is_empty() {
            return None;
        }
        let color = Color::parse(&args.positional().join(" ")).ok()?;
        Some(Box::new(Paint(color)))
    })
}

/// `r`: reflection.
pub fn reflect_factory() -> FnFactory<dyn Operator> {
    FnFactory::<dyn Operator>::new("r", &[], |_: &ParsedArgs| Some(Box::new(Reflect)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Factory;
    use approx::assert_relative_eq;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn triangle() -> Mesh {
        Mesh::build(
            vec![Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0), Point::new(0.0, 0.0, 1.0)],
            &[vec![0, 1, 2]],
            &[],
        )
        .unwrap()
    }

    #[test]
    fn test_scale_uniform_and_axes() {
        let uniform = scale_factory().parse(&strings(&["-f", "3"])).unwrap();
        assert_eq!(uniform.apply(&triangle()).position(1), Point::new(0.0, 3.0, 0.0));
        let axes = scale_factory().parse(&strings(&["-z", "2"])).unwrap();
        assert_eq!(axes.apply(&triangle()).position(2), Point::new(0.0, 0.0, 2.0));
        assert!(scale_factory().parse(&strings(&["-f", "big"])).is_none());
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotate = rotate_factory().parse(&strings(&["-z", "90"])).unwrap();
        let p = rotate.apply(&triangle()).position(0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_move() {
        let shift = move_factory().parse(&strings(&["-x", "-1", "-y2"])).unwrap();
        assert_eq!(shift.apply(&triangle()).position(0), Point::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_color() {
        let paint = color_factory().parse(&strings(&["255", "0", "0"])).unwrap();
        assert_eq!(paint.apply(&triangle()).face(0).color(), Color::RED);
        assert!(color_factory().parse(&[]).is_none());
        assert!(color_factory().parse(&strings(&["nope"])).is_none());
    }

    #[test]
    fn test_reflect_keeps_orientation() {
        let mesh = triangle();
        let reflected = Reflect.apply(&mesh);
        assert_eq!(reflected.position(0), Point::new(-1.0, 0.0, 0.0));
        assert_eq!(reflected.face(0).vertices(), &[2, 1, 0]);
        let before = mesh.face(0).normal(&mesh);
        let after = reflected.face(0).normal(&reflected);
        assert_relative_eq!(after.x, -before.x, epsilon = 1e-12);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-12);
    }
}
