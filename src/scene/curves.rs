//! Circle and ellipse rasterization demo.

use super::Scene;
use crate::canvas::Canvas;
use crate::geometry::Pixel;
use crate::raster;
use std::fmt;
use std::str::FromStr;

/// Which curve the demo draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// Two-region midpoint ellipse, 200 x 100, black.
    #[default]
    Ellipse,
    /// Midpoint circle of radius 100, blue.
    Circle,
    /// Circle of radius 100 sampled at 360 angles, black.
    Polar,
}

impl CurveMode {
    /// Every mode, in CLI order.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Ellipse, Self::Polar];

    /// Lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::Polar => "polar",
        }
    }

    fn color(self) -> (f32, f32, f32) {
        match self {
            Self::Circle => (0.0, 0.0, 1.0),
            Self::Ellipse | Self::Polar => (0.0, 0.0, 0.0),
        }
    }

    fn rasterize(self) -> Vec<Pixel> {
        match self {
            Self::Ellipse => raster::midpoint_ellipse(Pixel::ORIGIN, 200, 100).points(),
            Self::Circle => raster::midpoint_circle(Pixel::ORIGIN, 100),
            Self::Polar => raster::polar_circle(Pixel::ORIGIN, 100, 360),
        }
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown curve mode {s:?} (expected circle, ellipse or polar)"))
    }
}

/// Static curve scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvesScene {
    mode: CurveMode,
    pixels: Vec<Pixel>,
}

impl CurvesScene {
    /// Side of each plotted point, in world units.
    pub const POINT_SIZE: f32 = 5.0;

    /// Rasterize the curve for `mode`.
    #[must_use]
    pub fn new(mode: CurveMode) -> Self {
        Self { mode, pixels: mode.rasterize() }
    }

    /// Curve being drawn.
    #[must_use]
    pub const fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Rasterized curve in world coordinates.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Default for CurvesScene {
    fn default() -> Self {
        Self::new(CurveMode::default())
    }
}

impl Scene for CurvesScene {
    fn name(&self) -> &str {
        self.mode.as_str()
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        let (r, g, b) = self.mode.color();
        canvas.set_color(r, g, b);
        canvas.set_point_size(Self::POINT_SIZE);
        canvas.plot(&self.pixels);
    }
}
