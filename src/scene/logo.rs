//! Tourism-board logo: a red "N" inside two filled arc bands.

use super::Scene;
use crate::canvas::{Canvas, Primitive};
use crate::geometry::Point;
use crate::shapes;
use std::f32::consts::PI;

const OUTER_RADIUS: f32 = 180.0;
const INNER_RADIUS: f32 = 150.0;

/// Static logo scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoScene {
    segments: u32,
}

impl LogoScene {
    /// Arc segments used by the default logo.
    pub const DEFAULT_SEGMENTS: u32 = 500;

    /// Logo with `segments` steps per arc band.
    #[must_use]
    pub fn new(segments: u32) -> Self {
        Self { segments: segments.max(1) }
    }

    /// Vertical strokes and the crossbar.
    fn bars() -> [[Point; 4]; 3] {
        [
            shapes::rect(-60.0, 0.0, 50.0, 200.0),
            shapes::rect(60.0, 0.0, 50.0, 200.0),
            shapes::rect(0.0, 0.0, 360.0, 40.0),
        ]
    }

    /// Diagonal stroke from the top of the left bar to the bottom of the right.
    fn diagonal() -> [Point; 4] {
        [
            Point::new(-85.0, 100.0),
            Point::new(-35.0, 100.0),
            Point::new(85.0, -100.0),
            Point::new(35.0, -100.0),
        ]
    }
}

impl Default for LogoScene {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEGMENTS)
    }
}

impl Scene for LogoScene {
    fn name(&self) -> &str {
        "logo"
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_color(1.0, 0.0, 0.0);

        for bar in Self::bars() {
            canvas.draw(Primitive::Quads, &bar);
        }
        canvas.draw(Primitive::Quads, &Self::diagonal());

        let bands = [(PI / 6.0, PI), (7.0 * PI / 6.0, 2.0 * PI)];
        for (start, end) in bands {
            let strip = shapes::annulus_sector(OUTER_RADIUS, INNER_RADIUS, start, end, self.segments);
            canvas.draw(Primitive::TriangleStrip, &strip);
        }
    }
}
