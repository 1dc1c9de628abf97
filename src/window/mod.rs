//! Presentation surfaces.
//!
//! A [`Surface`] receives finished framebuffers and reports whether the user
//! asked to close. Two backends exist:
//!
//! - [`TerminalSurface`]: fullscreen alternate screen, half-block or ASCII cells
//! - [`HeadlessSurface`]: offscreen, closes after N frames, optional PNG snapshot

mod headless;
mod terminal;

pub use headless::HeadlessSurface;
pub use terminal::TerminalSurface;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Something a finished frame can be shown on.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn resolution(&self) -> (u32, u32);

    /// Display a finished frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written out.
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;

    /// Drain pending input without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if reading events fails.
    fn poll_events(&mut self) -> Result<()>;

    /// Whether a close was requested since the surface opened.
    fn close_requested(&self) -> bool;

    /// Release the surface. Called once after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if final output (e.g. a snapshot) cannot be written.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
