//! Offscreen surface for tests and batch rendering.

use super::Surface;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use std::path::PathBuf;

/// Keeps the last presented frame in memory.
#[derive(Debug)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    max_frames: Option<u64>,
    snapshot: Option<PathBuf>,
    frames_presented: u64,
    last_frame: Option<Framebuffer>,
    closed: bool,
}

impl HeadlessSurface {
    /// Create a surface of the given size that never closes on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            max_frames: None,
            snapshot: None,
            frames_presented: 0,
            last_frame: None,
            closed: false,
        })
    }

    /// Request close once `frames` frames have been presented.
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Write the last presented frame to `path` on release.
    #[must_use]
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// The most recently presented frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }
}

impl Surface for HeadlessSurface {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        match &mut self.last_frame {
            Some(last) => last.clone_from(frame),
            None => self.last_frame = Some(frame.clone()),
        }
        self.frames_presented += 1;
        if self.max_frames.is_some_and(|max| self.frames_presented >= max) {
            self.closed = true;
        }
        Ok(())
    }

    fn poll_events(&mut self) -> Result<()> {
        Ok(())
    }

    fn close_requested(&self) -> bool {
        self.closed || self.max_frames == Some(0)
    }

    fn release(&mut self) -> Result<()> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };
        match &self.last_frame {
            Some(frame) => {
                PngEncoder::write_to_file(frame, path)?;
                log::info!("wrote snapshot {}", path.display());
            }
            None => log::warn!("no frame presented, skipping snapshot {}", path.display()),
        }
        Ok(())
    }
}
