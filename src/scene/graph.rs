//! Line graph of a fixed series, one Bresenham segment per pair of samples.

use super::Scene;
use crate::canvas::Canvas;
use crate::geometry::Pixel;
use crate::raster::{self, LineAlgorithm};

/// Static line-graph scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphScene {
    pixels: Vec<Pixel>,
}

impl GraphScene {
    /// Sample values plotted by default.
    pub const DEFAULT_VALUES: [i32; 8] = [10, 30, 25, 40, 20, 35, 50, 45];
    /// World x of the first sample.
    pub const DEFAULT_X_START: i32 = 50;
    /// World distance between samples.
    pub const DEFAULT_X_STEP: i32 = 20;

    /// Graph of `values` placed at `x_start`, `x_start + x_step`, ...
    #[must_use]
    pub fn new(values: &[i32], x_start: i32, x_step: i32) -> Self {
        let vertices: Vec<Pixel> = (0..)
            .zip(values)
            .map(|(i, &y)| Pixel::new(x_start + i * x_step, y))
            .collect();
        let pixels = raster::polyline(&vertices, LineAlgorithm::Bresenham);
        Self { pixels }
    }

    /// Rasterized graph in world coordinates.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Default for GraphScene {
    fn default() -> Self {
        Self::new(&Self::DEFAULT_VALUES, Self::DEFAULT_X_START, Self::DEFAULT_X_STEP)
    }
}

impl Scene for GraphScene {
    fn name(&self) -> &str {
        "graph"
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_color(1.0, 0.0, 0.0);
        canvas.plot(&self.pixels);
    }
}
