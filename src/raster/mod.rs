//! Classical scan-conversion algorithms.
//!
//! Every routine here is pure: it takes integer parameters and returns the pixel
//! coordinates approximating the shape. Drawing them is the canvas' job.
//!
//! # Algorithms
//!
//! - **DDA line**: fractional incremental stepping along the major axis
//! - **Bresenham line**: integer decision variable, no floating point
//! - **Midpoint circle**: one octant plus 8-way symmetry
//! - **Midpoint ellipse**: two decision regions plus 4-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Hearn, D., & Baker, M. P. *Computer Graphics, C Version*, ch. 3.

pub mod circle;
pub mod ellipse;
pub mod line;

pub use circle::{midpoint as midpoint_circle, polar as polar_circle};
pub use ellipse::{midpoint as midpoint_ellipse, EllipseRaster};
pub use line::{bresenham, dda, polyline, LineAlgorithm};

use crate::geometry::Pixel;
use std::collections::HashSet;

/// Drop repeated pixels, keeping the first occurrence of each.
pub(crate) fn dedup_pixels(pixels: Vec<Pixel>) -> Vec<Pixel> {
    let mut seen = HashSet::with_capacity(pixels.len());
    pixels.into_iter().filter(|p| seen.insert(*p)).collect()
}

/// `center + (dx, dy)`, saturated to the `i32` pixel range.
///
/// Offsets are computed wide so large radii or centers near the edge of the
/// coordinate space pin to the boundary instead of wrapping around.
pub(crate) fn place(center: Pixel, dx: i128, dy: i128) -> Pixel {
    let saturate = |v: i128| i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX });
    Pixel::new(saturate(i128::from(center.x) + dx), saturate(i128::from(center.y) + dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_saturates_at_i32_limits() {
        assert_eq!(place(Pixel::new(3, -4), 2, 2), Pixel::new(5, -2));
        assert_eq!(place(Pixel::new(i32::MAX - 1, i32::MIN + 1), 5, -5), Pixel::new(i32::MAX, i32::MIN));
        assert_eq!(place(Pixel::ORIGIN, i128::from(u32::MAX), -i128::from(u32::MAX)), Pixel::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_dedup_keeps_first_order() {
        let input = vec![Pixel::new(1, 1), Pixel::new(0, 0), Pixel::new(1, 1), Pixel::new(2, 2)];
        assert_eq!(
            dedup_pixels(input),
            vec![Pixel::new(1, 1), Pixel::new(0, 0), Pixel::new(2, 2)]
        );
    }
}
