//! Scenes and the frame loop that drives them.
//!
//! Every run goes through the same states:
//!
//! ```text
//! Init -> Running (clear, update, draw, present, poll)* -> Teardown -> Closed
//! ```
//!
//! The loop stops as soon as the canvas reports `should_close()`, which a
//! scene may set itself during `setup` (the line demo does so for an unknown
//! algorithm selector, so nothing is ever presented).

mod curves;
mod graph;
mod line;
mod logo;
mod windmill;

pub use curves::{CurveMode, CurvesScene};
pub use graph::GraphScene;
pub use line::{LineRequest, LineScene, MAX_COORDINATE};
pub use logo::LogoScene;
pub use windmill::WindmillScene;

use crate::canvas::Canvas;
use crate::error::Result;
use std::time::{Duration, Instant};

/// Default delay between frames of a static scene.
pub const STATIC_FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// One demo: state plus how to draw it.
pub trait Scene {
    /// Short name, used as the surface title.
    fn name(&self) -> &str;

    /// Delay between frames when the configuration does not set one.
    fn frame_interval(&self) -> Duration {
        STATIC_FRAME_INTERVAL
    }

    /// Runs once before the first frame.
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_clear_color(1.0, 1.0, 1.0);
    }

    /// Advance animation state. Runs once per frame, before `draw`.
    fn update(&mut self) {}

    /// Draw the current frame onto a cleared canvas.
    fn draw(&mut self, canvas: &mut dyn Canvas);
}

// ============================================================================
// Pacing
// ============================================================================

/// Decides how long to wait between frames.
pub trait Pacer {
    /// Called after each frame with the time the frame took.
    fn wait(&mut self, frame_time: Duration);
}

/// Sleeps so that frames start `interval` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedInterval(pub Duration);

impl FixedInterval {
    /// Remaining sleep after a frame that took `frame_time`.
    #[must_use]
    pub fn remaining(&self, frame_time: Duration) -> Duration {
        self.0.saturating_sub(frame_time)
    }
}

impl Pacer for FixedInterval {
    fn wait(&mut self, frame_time: Duration) {
        let remaining = self.remaining(frame_time);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Never waits. Tests and benchmarks drive frames back to back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait(&mut self, _frame_time: Duration) {}
}

// ============================================================================
// Animation state
// ============================================================================

/// Rotation angle in degrees, kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAccumulator {
    angle: f32,
    step: f32,
}

impl AngleAccumulator {
    /// Start at 0 degrees, advancing `step` degrees per tick.
    #[must_use]
    pub const fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in degrees.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Degrees added per tick.
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Advance one step and return the new angle.
    pub fn tick(&mut self) -> f32 {
        let next = (self.angle + self.step).rem_euclid(360.0);
        // rem_euclid can round tiny negative sums up to exactly 360.
        self.angle = if next >= 360.0 { 0.0 } else { next };
        self.angle
    }
}

impl Default for AngleAccumulator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Frame loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Not started yet.
    #[default]
    Init,
    /// Producing frames.
    Running,
    /// Releasing the surface.
    Teardown,
    /// Finished; the driver will not run again.
    Closed,
}

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The canvas requested close (user input, surface cap, or the scene).
    CloseRequested,
    /// The driver's own frame limit was reached.
    FrameLimit,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented.
    pub frames: u64,
    /// Why the loop ended.
    pub reason: StopReason,
}

/// Runs a [`Scene`] on a [`Canvas`] until close is requested.
pub struct SceneDriver<C: Canvas, P: Pacer> {
    canvas: C,
    pacer: P,
    max_frames: Option<u64>,
    state: DriverState,
}

impl<C: Canvas, P: Pacer> SceneDriver<C, P> {
    /// Driver with no frame limit.
    pub fn new(canvas: C, pacer: P) -> Self {
        Self { canvas, pacer, max_frames: None, state: DriverState::Init }
    }

    /// Stop after `frames` frames even if nothing requests close.
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// The canvas being driven.
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give the canvas back after a run.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Run `scene` to completion.
    ///
    /// The canvas is always released, even when a frame fails; the frame error
    /// takes precedence over a release error.
    ///
    /// # Errors
    ///
    /// Returns the first error from presenting, polling or releasing.
    pub fn run(&mut self, scene: &mut dyn Scene) -> Result<RunSummary> {
        if self.state != DriverState::Init {
            log::warn!("driver reused in state {:?}", self.state);
        }

        log::info!("starting scene {}", scene.name());
        scene.setup(&mut self.canvas);
        self.state = DriverState::Running;

        let outcome = self.frame_loop(scene);

        self.state = DriverState::Teardown;
        let released = self.canvas.release();
        self.state = DriverState::Closed;

        let summary = outcome?;
        released?;
        log::info!("scene {} stopped after {} frames ({:?})", scene.name(), summary.frames, summary.reason);
        Ok(summary)
    }

    fn frame_loop(&mut self, scene: &mut dyn Scene) -> Result<RunSummary> {
        let mut frames = 0u64;
        loop {
            if self.canvas.should_close() {
                return Ok(RunSummary { frames, reason: StopReason::CloseRequested });
            }
            if self.max_frames.is_some_and(|max| frames >= max) {
                return Ok(RunSummary { frames, reason: StopReason::FrameLimit });
            }

            let started = Instant::now();
            self.canvas.clear();
            scene.update();
            scene.draw(&mut self.canvas);
            self.canvas.present()?;
            self.canvas.poll_events()?;
            frames += 1;

            let frame_time = started.elapsed();
            log::debug!("frame {frames} took {frame_time:?}");
            if !self.canvas.should_close() {
                self.pacer.wait(frame_time);
            }
        }
    }
}
