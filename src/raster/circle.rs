//! Circle scan conversion.

use super::{dedup_pixels, place};
use crate::geometry::Pixel;
use std::f64::consts::TAU;

/// The 8 symmetric positions of `(x, y)` about `center`.
fn octants(center: Pixel, x: i64, y: i64) -> [Pixel; 8] {
    let (x, y) = (i128::from(x), i128::from(y));
    [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)]
        .map(|(dx, dy)| place(center, dx, dy))
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Walks the octant from `(0, r)` while `x < y` with decision variable
/// `p = 1 - r`, mirroring each computed point into all 8 octants. Duplicates
/// produced on the symmetry axes are removed, so radius 0 yields only `center`.
///
/// The decision variable is an `i64`, so every `u32` radius is exact. Points
/// that fall outside the `i32` pixel range are pinned to its boundary.
#[must_use]
pub fn midpoint(center: Pixel, radius: u32) -> Vec<Pixel> {
    let r = i64::from(radius);
    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));
    pixels.extend(octants(center, x, y));

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x - 2 * y + 1;
        }
        pixels.extend(octants(center, x, y));
    }

    dedup_pixels(pixels)
}

/// Sample a circle at `samples` evenly spaced angles.
///
/// Coordinates are truncated toward zero, which leaves visible gaps on large
/// radii; this is the naive approach the midpoint algorithm improves on.
#[must_use]
pub fn polar(center: Pixel, radius: u32, samples: u32) -> Vec<Pixel> {
    let r = f64::from(radius);
    let pixels = (0..samples)
        .map(|i| {
            let theta = TAU * f64::from(i) / f64::from(samples);
            place(center, (r * theta.cos()) as i128, (r * theta.sin()) as i128)
        })
        .collect();
    dedup_pixels(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_radius_zero_is_center() {
        assert_eq!(midpoint(Pixel::new(7, -3), 0), vec![Pixel::new(7, -3)]);
    }

    #[test]
    fn test_radius_ten_scenario() {
        let pixels = midpoint(Pixel::ORIGIN, 10);
        assert!(pixels.contains(&Pixel::new(10, 0)));
        assert!(pixels.contains(&Pixel::new(0, 10)));
        assert!(pixels.contains(&Pixel::new(-10, 0)));
        assert!(pixels.contains(&Pixel::new(0, -10)));
        for p in &pixels {
            assert!(p.x * p.x + p.y * p.y <= 121, "{p:?} outside r=11");
        }
    }

    #[test]
    fn test_radius_one() {
        let set: HashSet<Pixel> = midpoint(Pixel::ORIGIN, 1).into_iter().collect();
        for p in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            assert!(set.contains(&Pixel::from(p)));
        }
        assert!(!set.contains(&Pixel::ORIGIN));
    }

    #[test]
    fn test_center_offset_applied() {
        let pixels = midpoint(Pixel::new(100, 50), 5);
        assert!(pixels.contains(&Pixel::new(105, 50)));
        assert!(pixels.contains(&Pixel::new(100, 45)));
    }

    #[test]
    fn test_center_near_i32_limits_saturates() {
        let center = Pixel::new(i32::MAX - 2, i32::MIN + 2);
        let pixels = midpoint(center, 5);
        assert!(pixels.contains(&Pixel::new(i32::MAX, i32::MIN + 2)));
        assert!(pixels.contains(&Pixel::new(i32::MAX - 2, i32::MIN)));
        assert!(pixels.contains(&Pixel::new(i32::MAX - 7, i32::MIN + 2)));
        assert!(pixels.iter().all(|p| p.x >= i32::MAX - 7 && p.y <= i32::MIN + 7));

        let sampled = polar(center, 5, 36);
        assert!(sampled.contains(&Pixel::new(i32::MAX, i32::MIN + 2)));
    }

    #[test]
    fn test_no_duplicates() {
        let pixels = midpoint(Pixel::ORIGIN, 25);
        let set: HashSet<Pixel> = pixels.iter().copied().collect();
        assert_eq!(set.len(), pixels.len());
    }

    #[test]
    fn test_polar_hits_axes() {
        let pixels = polar(Pixel::ORIGIN, 100, 360);
        assert!(pixels.contains(&Pixel::new(100, 0)));
        assert!(pixels.contains(&Pixel::new(0, 100)));
        for p in &pixels {
            assert!(p.x * p.x + p.y * p.y <= 100 * 100);
        }
    }

    #[test]
    fn test_polar_zero_samples() {
        assert!(polar(Pixel::ORIGIN, 10, 0).is_empty());
    }
}
