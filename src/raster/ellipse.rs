//! Axis-aligned ellipse scan conversion.

use super::{dedup_pixels, place};
use crate::geometry::Pixel;

/// Output of the two-region midpoint ellipse algorithm.
///
/// Region points are first-quadrant offsets from the center, in the order the
/// algorithm produced them. [`EllipseRaster::points`] expands them into the full
/// outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipseRaster {
    /// Ellipse center.
    pub center: Pixel,
    /// Starting point `(0, ry)`.
    pub seed: Pixel,
    /// Points where the tangent slope magnitude is below 1, stepped in `x`.
    pub region1: Vec<Pixel>,
    /// Points where the slope magnitude is at least 1, stepped in `y`.
    pub region2: Vec<Pixel>,
}

impl EllipseRaster {
    /// The last point of the first region (the seed if it is empty) paired with the
    /// first point of the second region, if the second region produced anything.
    #[must_use]
    pub fn handoff(&self) -> Option<(Pixel, Pixel)> {
        let last = self.region1.last().copied().unwrap_or(self.seed);
        self.region2.first().map(|&first| (last, first))
    }

    /// The first-quadrant arc, seed first.
    pub fn quadrant(&self) -> impl Iterator<Item = Pixel> + '_ {
        std::iter::once(self.seed)
            .chain(self.region1.iter().copied())
            .chain(self.region2.iter().copied())
    }

    /// The full outline: every quadrant point mirrored into all four quadrants and
    /// offset by the center, without duplicates.
    #[must_use]
    pub fn points(&self) -> Vec<Pixel> {
        let mirrored = self
            .quadrant()
            .flat_map(|p| {
                let (x, y) = (i128::from(p.x), i128::from(p.y));
                [(x, y), (-x, y), (x, -y), (-x, -y)]
            })
            .map(|(dx, dy)| place(self.center, dx, dy))
            .collect();
        dedup_pixels(mirrored)
    }
}

/// Rasterize an ellipse with radii `rx`, `ry` using the midpoint algorithm.
///
/// Decision variables are kept multiplied by 4 so the `1/4` and `1/2` terms of the
/// textbook formulation stay integral. Zero radii degenerate to a segment or the
/// center point.
///
/// Quadrant offsets beyond `i32::MAX` are pinned to it, as are outline points
/// that would leave the `i32` pixel range.
#[must_use]
pub fn midpoint(center: Pixel, rx: u32, ry: u32) -> EllipseRaster {
    let a2 = i128::from(rx) * i128::from(rx);
    let b2 = i128::from(ry) * i128::from(ry);

    let mut x: i128 = 0;
    let mut y = i128::from(ry);
    let mut dx = 0;
    let mut dy = 2 * a2 * y;

    let px = |x: i128, y: i128| place(Pixel::ORIGIN, x, y);

    // Region 1: p = ry² - rx²·ry + rx²/4
    let mut region1 = Vec::new();
    let mut p = 4 * b2 - 4 * a2 * y + a2;
    while dx < dy {
        x += 1;
        dx += 2 * b2;
        if p < 0 {
            p += 4 * (dx + b2);
        } else {
            y -= 1;
            dy -= 2 * a2;
            p += 4 * (dx - dy + b2);
        }
        region1.push(px(x, y));
    }

    // Region 2: p = ry²(x + 1/2)² + rx²(y - 1)² - rx²·ry²
    let mut region2 = Vec::new();
    let mut p = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y > 0 {
        y -= 1;
        dy -= 2 * a2;
        if p > 0 {
            p += 4 * (a2 - dy);
        } else {
            x += 1;
            dx += 2 * b2;
            p += 4 * (dx - dy + a2);
        }
        region2.push(px(x, y));
    }

    // Flat ellipses can reach y = 0 short of rx; finish along the axis.
    while x < i128::from(rx) {
        x += 1;
        region2.push(px(x, 0));
    }

    EllipseRaster { center, seed: px(0, i128::from(ry)), region1, region2 }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// The two regions meet without a gap or a repeated pixel.
        #[test]
        fn prop_region_handoff_adjacent(rx in 1u32..400, ry in 1u32..400) {
            let raster = midpoint(Pixel::ORIGIN, rx, ry);
            if let Some((last, first)) = raster.handoff() {
                prop_assert!(last.chebyshev(first) <= 1, "{:?} -> {:?}", last, first);
                prop_assert_ne!(last, first);
            }
        }

        /// The quadrant arc is 8-connected from (0, ry) to (rx, 0).
        #[test]
        fn prop_quadrant_connected(rx in 0u32..300, ry in 0u32..300) {
            let raster = midpoint(Pixel::ORIGIN, rx, ry);
            let quadrant: Vec<Pixel> = raster.quadrant().collect();
            for w in quadrant.windows(2) {
                prop_assert_eq!(w[0].chebyshev(w[1]), 1);
            }
            prop_assert_eq!(quadrant.last().copied(), Some(Pixel::new(rx as i32, 0)));
        }
    }
}
