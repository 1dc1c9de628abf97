//! Straight-line scan conversion.

use crate::geometry::Pixel;

/// Line rasterization algorithm, as offered by the line demo's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAlgorithm {
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's integer midpoint algorithm.
    Bresenham,
}

impl LineAlgorithm {
    /// Map the numeric menu selector (`1` = DDA, `2` = Bresenham).
    #[must_use]
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::Dda),
            2 => Some(Self::Bresenham),
            _ => None,
        }
    }

    /// Rasterize the segment from `start` to `end`.
    #[must_use]
    pub fn rasterize(self, start: Pixel, end: Pixel) -> Vec<Pixel> {
        match self {
            Self::Dda => dda(start, end),
            Self::Bresenham => bresenham(start, end),
        }
    }
}

/// Rasterize a line with the DDA algorithm.
///
/// Takes `max(|dx|, |dy|)` steps with floating-point increments and emits
/// `steps + 1` pixels, each rounded to the nearest integer. A zero-length line
/// yields its single endpoint.
#[must_use]
pub fn dda(start: Pixel, end: Pixel) -> Vec<Pixel> {
    let (dx, dy) = span(start, end);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![start];
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;

    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);
    let mut pixels = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        pixels.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    pixels
}

/// Signed `(dx, dy)` from `start` to `end`, widened so any two `i32` endpoints fit.
fn span(start: Pixel, end: Pixel) -> (i64, i64) {
    (i64::from(end.x) - i64::from(start.x), i64::from(end.y) - i64::from(start.y))
}

/// Rasterize a line with Bresenham's algorithm.
///
/// Integer-only. Deltas and the doubled decision terms are kept in `i64`.
/// The loop walks the major axis until it reaches the target; the end point
/// is appended explicitly, so the result always ends at `end`.
#[must_use]
pub fn bresenham(start: Pixel, end: Pixel) -> Vec<Pixel> {
    if start == end {
        return vec![start];
    }

    let (dx, dy) = span(start, end);
    let (dx, dy) = (dx.abs(), dy.abs());
    let sx: i64 = if start.x < end.x { 1 } else { -1 };
    let sy: i64 = if start.y < end.y { 1 } else { -1 };

    let (end_x, end_y) = (i64::from(end.x), i64::from(end.y));
    let mut x = i64::from(start.x);
    let mut y = i64::from(start.y);
    // x and y never leave the box spanned by the endpoints, so they fit in i32.
    let px = |x: i64, y: i64| Pixel::new(x as i32, y as i32);
    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);

    if dx > dy {
        // |slope| < 1: x is the driving axis
        let mut pk = 2 * dy - dx;
        while x != end_x {
            pixels.push(px(x, y));
            if pk >= 0 {
                y += sy;
                pk -= 2 * dx;
            }
            pk += 2 * dy;
            x += sx;
        }
    } else {
        let mut pk = 2 * dx - dy;
        while y != end_y {
            pixels.push(px(x, y));
            if pk >= 0 {
                x += sx;
                pk -= 2 * dy;
            }
            pk += 2 * dx;
            y += sy;
        }
    }

    debug_assert_eq!(px(x, y), end);
    pixels.push(end);
    pixels
}

/// Rasterize consecutive segments of a polyline.
///
/// Shared vertices are emitted once. Fewer than two vertices yield the vertices
/// themselves.
#[must_use]
pub fn polyline(vertices: &[Pixel], algorithm: LineAlgorithm) -> Vec<Pixel> {
    if vertices.len() < 2 {
        return vertices.to_vec();
    }

    let mut pixels = Vec::new();
    for (i, pair) in vertices.windows(2).enumerate() {
        let segment = algorithm.rasterize(pair[0], pair[1]);
        let skip = usize::from(i > 0);
        pixels.extend(segment.into_iter().skip(skip));
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Pixel {
        Pixel::new(x, y)
    }

    #[test]
    fn test_selector_mapping() {
        assert_eq!(LineAlgorithm::from_selector(1), Some(LineAlgorithm::Dda));
        assert_eq!(LineAlgorithm::from_selector(2), Some(LineAlgorithm::Bresenham));
        assert_eq!(LineAlgorithm::from_selector(0), None);
        assert_eq!(LineAlgorithm::from_selector(3), None);
        assert_eq!(LineAlgorithm::from_selector(-1), None);
    }

    #[test]
    fn test_single_point_both_variants() {
        assert_eq!(dda(p(4, -2), p(4, -2)), vec![p(4, -2)]);
        assert_eq!(bresenham(p(4, -2), p(4, -2)), vec![p(4, -2)]);
    }

    #[test]
    fn test_span_does_not_wrap_at_i32_extremes() {
        assert_eq!(span(p(0, -2_000_000_000), p(0, 2_000_000_000)), (0, 4_000_000_000));
        assert_eq!(span(p(i32::MAX, 0), p(i32::MIN, 0)), (-(1_i64 << 32) + 1, 0));
    }

    #[test]
    fn test_short_lines_near_i32_limits() {
        let start = p(i32::MAX - 5, i32::MIN + 2);
        let end = p(i32::MAX, i32::MIN);
        for pixels in [dda(start, end), bresenham(start, end)] {
            assert_eq!(pixels.first(), Some(&start));
            assert_eq!(pixels.last(), Some(&end));
            assert_eq!(pixels.len(), 6);
        }
    }

    #[test]
    fn test_bresenham_scenario_0_0_to_5_2() {
        let pixels = bresenham(p(0, 0), p(5, 2));
        assert!(pixels.len() <= 6);
        assert_eq!(pixels.first(), Some(&p(0, 0)));
        assert_eq!(pixels.last(), Some(&p(5, 2)));
        assert_eq!(pixels, vec![p(0, 0), p(1, 0), p(2, 1), p(3, 1), p(4, 2), p(5, 2)]);
    }

    #[test]
    fn test_bresenham_horizontal_and_vertical() {
        assert_eq!(bresenham(p(0, 3), p(4, 3)), vec![p(0, 3), p(1, 3), p(2, 3), p(3, 3), p(4, 3)]);
        assert_eq!(bresenham(p(2, 2), p(2, -1)), vec![p(2, 2), p(2, 1), p(2, 0), p(2, -1)]);
    }

    #[test]
    fn test_bresenham_steep_reverse() {
        let pixels = bresenham(p(3, 10), p(0, 0));
        assert_eq!(pixels.len(), 11);
        assert_eq!(pixels.first(), Some(&p(3, 10)));
        assert_eq!(pixels.last(), Some(&p(0, 0)));
        for w in pixels.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1);
        }
    }

    #[test]
    fn test_bresenham_diagonal() {
        let pixels = bresenham(p(0, 0), p(-4, 4));
        assert_eq!(pixels, (0..=4).map(|i| p(-i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_dda_emits_steps_plus_one() {
        let pixels = dda(p(0, 0), p(10, 3));
        assert_eq!(pixels.len(), 11);
        assert_eq!(pixels.first(), Some(&p(0, 0)));
        assert_eq!(pixels.last(), Some(&p(10, 3)));
    }

    #[test]
    fn test_dda_vertical() {
        assert_eq!(dda(p(1, 0), p(1, 3)), vec![p(1, 0), p(1, 1), p(1, 2), p(1, 3)]);
    }

    #[test]
    fn test_polyline_shares_vertices() {
        let pixels = polyline(&[p(0, 0), p(2, 0), p(2, 2)], LineAlgorithm::Bresenham);
        assert_eq!(pixels, vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn test_polyline_short_input() {
        assert!(polyline(&[], LineAlgorithm::Dda).is_empty());
        assert_eq!(polyline(&[p(1, 1)], LineAlgorithm::Dda), vec![p(1, 1)]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = i32> {
        -500i32..500
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Bresenham always finishes exactly on the requested end point.
        #[test]
        fn prop_bresenham_ends_at_target(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
            let pixels = bresenham(Pixel::new(x1, y1), Pixel::new(x2, y2));
            prop_assert_eq!(pixels.first().copied(), Some(Pixel::new(x1, y1)));
            prop_assert_eq!(pixels.last().copied(), Some(Pixel::new(x2, y2)));
        }

        /// Bresenham emits one pixel per major-axis step, each 8-connected to the last.
        #[test]
        fn prop_bresenham_is_connected(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
            let pixels = bresenham(Pixel::new(x1, y1), Pixel::new(x2, y2));
            let major = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            prop_assert_eq!(pixels.len(), major + 1);
            for w in pixels.windows(2) {
                prop_assert_eq!(w[0].chebyshev(w[1]), 1);
            }
        }

        /// Degenerate lines collapse to exactly one pixel for both variants.
        #[test]
        fn prop_zero_length_single_point(x in coord(), y in coord()) {
            let pt = Pixel::new(x, y);
            prop_assert_eq!(dda(pt, pt), vec![pt]);
            prop_assert_eq!(bresenham(pt, pt), vec![pt]);
        }

        /// DDA emits steps + 1 points and lands on the end point.
        #[test]
        fn prop_dda_count_and_end(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
            let pixels = dda(Pixel::new(x1, y1), Pixel::new(x2, y2));
            let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            prop_assert_eq!(pixels.len(), steps + 1);
            prop_assert_eq!(pixels.last().copied(), Some(Pixel::new(x2, y2)));
        }
    }
}
