//! Point types shared by the raster and transform modules.
//!
//! Raster algorithms work on integer [`Pixel`]s; the transform pipeline works on
//! floating-point homogeneous [`Point`]s.

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pixel {
    /// Origin pixel (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to another pixel.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point in homogeneous coordinates `(x, y, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Homogeneous weight, 1 for every point built with [`Point::new`].
    pub w: f32,
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Point {
    /// Origin point (0, 0, 1).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point with `w = 1`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, w: 1.0 }
    }

    /// The point as a column vector `[x, y, w]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.w]
    }

    /// Calculate the Euclidean distance to another point, ignoring `w`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev() {
        assert_eq!(Pixel::new(0, 0).chebyshev(Pixel::new(1, 1)), 1);
        assert_eq!(Pixel::new(0, 0).chebyshev(Pixel::new(-3, 2)), 3);
        assert_eq!(Pixel::new(5, 5).chebyshev(Pixel::new(5, 5)), 0);
    }

    #[test]
    fn test_point_is_homogeneous() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.to_array(), [3.0, 4.0, 1.0]);
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_from_pixel() {
        let p: Point = Pixel::new(-2, 7).into();
        assert_eq!(p, Point::new(-2.0, 7.0));
    }
}
