//! 2D affine transforms in homogeneous coordinates.
//!
//! Matrices are row-major and act on column vectors `(x, y, w)`. Every constructor
//! here produces a matrix whose bottom row is `[0, 0, 1]`, so `w` stays 1 for
//! points built with [`Point::new`]. [`apply_transformation`] does not renormalize
//! `w`; projective matrices would need an explicit divide.
//!
//! Transforms compose by applying them one after another to the point set. Rotation
//! is about the origin, so a polygon must already be centered there to spin in
//! place.

use crate::geometry::Point;
use std::ops::Mul;

/// A 3×3 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Rows of the matrix.
    pub m: [[f32; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self { m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] };

    /// Build a matrix from its rows.
    #[must_use]
    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Multiply this matrix by the column vector of `p`.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, p: Point) -> Point {
        let v = p.to_array();
        let row = |i: usize| self.m[i][0] * v[0] + self.m[i][1] * v[1] + self.m[i][2] * v[2];
        Point { x: row(0), y: row(1), w: row(2) }
    }

    /// Whether the bottom row is exactly `[0, 0, 1]`.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.m[2] == [0.0, 0.0, 1.0]
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: out }
    }
}

/// Translation by `(tx, ty)`.
#[must_use]
pub fn translate(tx: f32, ty: f32) -> Matrix3 {
    Matrix3::from_rows([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
}

/// Scaling by `(sx, sy)` about the origin.
#[must_use]
pub fn scale(sx: f32, sy: f32) -> Matrix3 {
    Matrix3::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
}

/// Counter-clockwise rotation about the origin by `degrees`.
#[must_use]
pub fn rotate(degrees: f32) -> Matrix3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Matrix3::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
}

/// Map every point of the set through `matrix`, in place.
///
/// Each point becomes `matrix · (x, y, w)ᵀ`; the resulting `w` is stored as is.
pub fn apply_transformation(points: &mut [Point], matrix: &Matrix3) {
    for point in points.iter_mut() {
        *point = matrix.transform_point(*point);
    }
}

/// Non-mutating form of [`apply_transformation`].
#[must_use]
pub fn transformed(points: &[Point], matrix: &Matrix3) -> Vec<Point> {
    points.iter().map(|&p| matrix.transform_point(p)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Rotating by θ and then by -θ returns the original points.
        #[test]
        fn prop_rotation_roundtrip(
            theta in -720.0f32..720.0,
            coords in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..16)
        ) {
            let original: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let mut pts = original.clone();
            apply_transformation(&mut pts, &rotate(theta));
            apply_transformation(&mut pts, &rotate(-theta));

            for (a, b) in pts.iter().zip(&original) {
                // 1e-4 relative to the coordinate magnitude; f32 carries ~7 digits.
                let tol = 1e-4 * b.x.abs().max(b.y.abs()).max(1.0);
                prop_assert!((a.x - b.x).abs() <= tol, "x {} vs {}", a.x, b.x);
                prop_assert!((a.y - b.y).abs() <= tol, "y {} vs {}", a.y, b.y);
                prop_assert_eq!(a.w, 1.0);
            }
        }

        /// Translation then its inverse is exact enough to round-trip.
        #[test]
        fn prop_translation_inverse(tx in -1e3f32..1e3, ty in -1e3f32..1e3, x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let p = translate(-tx, -ty).transform_point(translate(tx, ty).transform_point(Point::new(x, y)));
            prop_assert!((p.x - x).abs() < 1e-3);
            prop_assert!((p.y - y).abs() < 1e-3);
        }
    }
}
