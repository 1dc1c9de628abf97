//! Pixel-space drawing routines.
//!
//! Coordinates here are framebuffer pixels (origin top-left, y down). Anything
//! outside the buffer is clipped.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Pixel;
use crate::raster;

// ============================================================================
// Points
// ============================================================================

/// Draw a square point of `size` pixels centered on `(x, y)`.
///
/// Sizes below one pixel still cover a single pixel.
pub fn draw_point(fb: &mut Framebuffer, x: f32, y: f32, size: f32, color: Rgba) {
    let size = size.max(1.0);
    let half = size / 2.0;
    let x0 = (x - half).round() as i32;
    let y0 = (y - half).round() as i32;
    let extent = size.round().max(1.0) as i32;

    for row in y0..y0 + extent {
        fb.fill_span(row, x0, x0 + extent - 1, color);
    }
}

/// Set each pixel in the slice.
pub fn draw_pixels(fb: &mut Framebuffer, pixels: &[Pixel], color: Rgba) {
    for p in pixels {
        fb.plot(p.x, p.y, color);
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Draw a line of the given width using Bresenham's algorithm.
///
/// Widths above one pixel stamp a square brush at every step.
pub fn draw_line(fb: &mut Framebuffer, from: Pixel, to: Pixel, width: f32, color: Rgba) {
    let pixels = raster::bresenham(from, to);
    if width <= 1.0 {
        draw_pixels(fb, &pixels, color);
    } else {
        for p in pixels {
            draw_point(fb, p.x as f32, p.y as f32, width, color);
        }
    }
}

// ============================================================================
// Polygons
// ============================================================================

/// Fill a polygon with the even-odd rule.
///
/// A pixel is filled when its center lies inside. Vertex order may be either
/// winding; fewer than three vertices draw nothing.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[(f32, f32)], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

    let first_row = (min_y - 0.5).ceil().max(0.0) as i32;
    let last_row = ((max_y - 0.5).floor() as i32).min(fb.height() as i32 - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());
    for row in first_row..=last_row {
        let sample_y = row as f32 + 0.5;
        crossings.clear();

        for (i, &(x0, y0)) in vertices.iter().enumerate() {
            let (x1, y1) = vertices[(i + 1) % vertices.len()];
            // Half-open on y so shared vertices count once.
            if (y0 <= sample_y && sample_y < y1) || (y1 <= sample_y && sample_y < y0) {
                let t = (sample_y - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }

        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil() as i32;
            let end = (span[1] - 0.5).floor() as i32;
            if start <= end {
                fb.fill_span(row, start, end, color);
            }
        }
    }
}

/// Fill a single triangle.
pub fn fill_triangle(fb: &mut Framebuffer, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgba) {
    fill_polygon(fb, &[a, b, c], color);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = blank(100, 100);
        draw_line(&mut fb, Pixel::new(10, 50), Pixel::new(90, 50), 1.0, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 81);
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = blank(100, 100);
        draw_line(&mut fb, Pixel::new(10, 10), Pixel::new(90, 90), 1.0, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 90), Some(Rgba::BLACK));
    }

    #[test]
    fn test_wide_line_covers_more() {
        let mut thin = blank(50, 50);
        let mut wide = blank(50, 50);
        draw_line(&mut thin, Pixel::new(5, 25), Pixel::new(45, 25), 1.0, Rgba::RED);
        draw_line(&mut wide, Pixel::new(5, 25), Pixel::new(45, 25), 5.0, Rgba::RED);
        assert!(wide.count_color(Rgba::RED) > 4 * thin.count_color(Rgba::RED));
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = blank(100, 100);
        draw_line(&mut fb, Pixel::new(-10, -10), Pixel::new(110, 110), 1.0, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_point_size() {
        let mut fb = blank(20, 20);
        draw_point(&mut fb, 10.0, 10.0, 5.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 25);
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLUE));
    }

    #[test]
    fn test_draw_point_minimum_one_pixel() {
        let mut fb = blank(20, 20);
        draw_point(&mut fb, 3.0, 4.0, 0.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 1);
    }

    #[test]
    fn test_fill_square() {
        let mut fb = blank(20, 20);
        fill_polygon(&mut fb, &[(2.0, 2.0), (12.0, 2.0), (12.0, 12.0), (2.0, 12.0)], Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 100);
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(12, 12), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_triangle_either_winding() {
        let mut cw = blank(30, 30);
        let mut ccw = blank(30, 30);
        fill_triangle(&mut cw, (0.0, 0.0), (20.0, 0.0), (0.0, 20.0), Rgba::RED);
        fill_triangle(&mut ccw, (0.0, 0.0), (0.0, 20.0), (20.0, 0.0), Rgba::RED);
        assert_eq!(cw, ccw);
        assert!(cw.count_color(Rgba::RED) > 150);
        assert_eq!(cw.get_pixel(25, 25), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_degenerate_polygon() {
        let mut fb = blank(10, 10);
        fill_polygon(&mut fb, &[(0.0, 0.0), (5.0, 5.0)], Rgba::RED);
        fill_polygon(&mut fb, &[(0.0, 0.0), (5.0, 0.0), (9.0, 0.0)], Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_fill_clipped_polygon() {
        let mut fb = blank(10, 10);
        fill_polygon(&mut fb, &[(-50.0, -50.0), (50.0, -50.0), (50.0, 50.0), (-50.0, 50.0)], Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }
}
