//! Four-bladed windmill spinning about the origin.

use super::{AngleAccumulator, Scene};
use crate::canvas::{Canvas, Primitive};
use crate::geometry::Point;
use crate::transform;
use std::time::Duration;

const BLADES: [([Point; 3], (f32, f32, f32)); 4] = [
    ([Point::ORIGIN, Point::new(20.0, 100.0), Point::new(-20.0, 100.0)], (1.0, 0.0, 0.0)),
    ([Point::ORIGIN, Point::new(20.0, -100.0), Point::new(-20.0, -100.0)], (0.0, 1.0, 0.0)),
    ([Point::ORIGIN, Point::new(100.0, 20.0), Point::new(100.0, -20.0)], (0.0, 0.0, 1.0)),
    ([Point::ORIGIN, Point::new(-100.0, 20.0), Point::new(-100.0, -20.0)], (1.0, 1.0, 0.0)),
];

/// Animated windmill; the first frame shows the blades unrotated.
#[derive(Debug, Clone, PartialEq)]
pub struct WindmillScene {
    angle: AngleAccumulator,
    started: bool,
}

impl WindmillScene {
    /// Default delay between frames.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(500);

    /// Windmill turning `step` degrees per frame (counter-clockwise when positive).
    #[must_use]
    pub const fn new(step: f32) -> Self {
        Self { angle: AngleAccumulator::new(step), started: false }
    }

    /// Rotation applied to the next drawn frame, in degrees.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle.angle()
    }

    /// Blade triangles at the current angle, each with its color.
    #[must_use]
    pub fn blades(&self) -> [([Point; 3], (f32, f32, f32)); 4] {
        let rotation = transform::rotate(self.angle.angle());
        BLADES.map(|(mut blade, color)| {
            transform::apply_transformation(&mut blade, &rotation);
            (blade, color)
        })
    }
}

impl Default for WindmillScene {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Scene for WindmillScene {
    fn name(&self) -> &str {
        "windmill"
    }

    fn frame_interval(&self) -> Duration {
        Self::FRAME_INTERVAL
    }

    fn update(&mut self) {
        if self.started {
            self.angle.tick();
        }
        self.started = true;
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        for (blade, (r, g, b)) in self.blades() {
            canvas.set_color(r, g, b);
            canvas.draw(Primitive::Polygon, &blade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::scene::tests::headless;
    use crate::scene::{SceneDriver, Unpaced};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_frame_unrotated() {
        let mut scene = WindmillScene::default();
        scene.update();
        assert_eq!(scene.angle(), 0.0);
        scene.update();
        assert_eq!(scene.angle(), 1.0);
    }

    #[test]
    fn test_quarter_turn_swaps_blades() {
        let mut scene = WindmillScene::new(90.0);
        scene.update();
        scene.update();

        let blades = scene.blades();
        // The upward red blade now points left.
        assert_abs_diff_eq!(blades[0].0[1].x, -100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(blades[0].0[1].y, 20.0, epsilon = 1e-3);
        // Hubs never move.
        for (blade, _) in blades {
            assert_abs_diff_eq!(blade[0].x, 0.0);
            assert_abs_diff_eq!(blade[0].y, 0.0);
        }
    }

    #[test]
    fn test_rotation_does_not_compound() {
        let mut scene = WindmillScene::new(10.0);
        for _ in 0..37 {
            scene.update();
        }
        // 36 ticks of 10 degrees is a full turn.
        assert_eq!(scene.angle(), 0.0);
        let tip = scene.blades()[0].0[1];
        assert_abs_diff_eq!(tip.x, 20.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_draws_four_colors() {
        let mut driver = SceneDriver::new(headless(300, 300), Unpaced).with_max_frames(1);
        driver.run(&mut WindmillScene::default()).unwrap();

        let frame = driver.canvas().frame();
        // Blade centroids at 80 units out along each axis.
        assert_eq!(frame.get_pixel(150, 70), Some(Rgba::RED));
        assert_eq!(frame.get_pixel(150, 230), Some(Rgba::GREEN));
        assert_eq!(frame.get_pixel(230, 150), Some(Rgba::BLUE));
        assert_eq!(frame.get_pixel(70, 150), Some(Rgba::YELLOW));
        assert_eq!(frame.get_pixel(20, 20), Some(Rgba::WHITE));
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(WindmillScene::default().frame_interval(), Duration::from_millis(500));
    }
}
