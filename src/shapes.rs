//! Trigonometric tessellation of curved shapes into vertex lists.
//!
//! These produce world-space vertices for the canvas' filled primitives; they are
//! the polygon-based counterpart to the pixel rasterizers in [`crate::raster`].
//! Angles are in radians.

use crate::geometry::Point;

/// Corners of an axis-aligned rectangle centered on `(cx, cy)`, counter-clockwise
/// from the bottom-left.
#[must_use]
pub fn rect(cx: f32, cy: f32, width: f32, height: f32) -> [Point; 4] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    [
        Point::new(cx - hw, cy - hh),
        Point::new(cx + hw, cy - hh),
        Point::new(cx + hw, cy + hh),
        Point::new(cx - hw, cy + hh),
    ]
}

/// Evenly spaced angles from `start` to `end` inclusive (`segments + 1` values).
fn sweep(start: f32, end: f32, segments: u32) -> impl Iterator<Item = f32> {
    let segments = segments.max(1);
    (0..=segments).map(move |i| start + (end - start) * i as f32 / segments as f32)
}

/// Triangle-strip vertices filling the band between two concentric arcs.
///
/// Vertices alternate outer, inner for each angle step.
#[must_use]
pub fn annulus_sector(outer: f32, inner: f32, start: f32, end: f32, segments: u32) -> Vec<Point> {
    sweep(start, end, segments).flat_map(|t| [polar(outer, t), polar(inner, t)]).collect()
}

#[inline]
fn polar(radius: f32, theta: f32) -> Point {
    let (sin, cos) = theta.sin_cos();
    Point::new(radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_rect_corners() {
        let r = rect(-60.0, 0.0, 50.0, 200.0);
        assert_eq!(r[0], Point::new(-85.0, -100.0));
        assert_eq!(r[2], Point::new(-35.0, 100.0));
    }

    #[test]
    fn test_annulus_sector_endpoints() {
        let strip = annulus_sector(150.0, 120.0, PI / 6.0, PI, 500);
        assert_eq!(strip.len(), 1002);
        assert_abs_diff_eq!(strip[1000].x, -150.0, epsilon = 1e-3);
        assert_abs_diff_eq!(strip[1001].x, -120.0, epsilon = 1e-3);
        assert_abs_diff_eq!(strip[0].y, 75.0, epsilon = 1e-3);
    }

    #[test]
    fn test_annulus_alternates_radii() {
        let strip = annulus_sector(180.0, 150.0, 0.0, PI, 4);
        assert_eq!(strip.len(), 10);
        for (i, p) in strip.iter().enumerate() {
            let expected = if i % 2 == 0 { 180.0 } else { 150.0 };
            assert_abs_diff_eq!(p.distance(Point::ORIGIN), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_zero_segments_still_spans() {
        let strip = annulus_sector(2.0, 1.0, 0.0, PI, 0);
        assert_eq!(strip.len(), 4);
    }
}
