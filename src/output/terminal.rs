//! Terminal output encoder (ASCII / Unicode half-block).
//!
//! Turns a framebuffer into rows of terminal text:
//! - ASCII: grayscale ramp ` .:-=+*#%@`, one pixel per cell
//! - Unicode half-block: `▀` with 24-bit foreground/background colors, two
//!   vertically stacked pixels per cell

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as FmtWrite};
use std::str::FromStr;

/// Terminal rendering mode.
///
/// Named `ascii` and `halfblock` in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[serde(rename = "ascii")]
    Ascii,
    /// Unicode half-block characters with true color (2x vertical resolution)
    #[default]
    #[serde(rename = "halfblock")]
    UnicodeHalfBlock,
}

impl TerminalMode {
    /// Lowercase name used in config and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::UnicodeHalfBlock => "halfblock",
        }
    }

    /// Framebuffer pixels covered by one character cell, vertically.
    #[must_use]
    pub const fn pixels_per_row(self) -> u32 {
        match self {
            Self::Ascii => 1,
            Self::UnicodeHalfBlock => 2,
        }
    }
}

impl fmt::Display for TerminalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Ascii, Self::UnicodeHalfBlock]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown terminal mode {s:?} (expected ascii or halfblock)"))
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    columns: Option<u32>,
    rows: Option<u32>,
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output width in character cells.
    /// If not set, one cell per framebuffer column.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the output height in text rows.
    /// If not set, enough rows to cover every framebuffer row.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Render a framebuffer to one string per text row, without line terminators.
    #[must_use]
    pub fn render_rows(&self, fb: &Framebuffer) -> Vec<String> {
        let per_row = self.mode.pixels_per_row();
        let columns = self.columns.unwrap_or(fb.width()).max(1);
        let rows = self.rows.unwrap_or_else(|| fb.height().div_ceil(per_row)).max(1);

        let scale_x = fb.width() as f32 / columns as f32;
        let scale_y = fb.height() as f32 / (rows * per_row) as f32;
        let sample = |cx: u32, py: u32| -> Rgba {
            let fx = ((cx as f32 * scale_x) as u32).min(fb.width() - 1);
            let fy = ((py as f32 * scale_y) as u32).min(fb.height() - 1);
            fb.get_pixel(fx, fy).unwrap_or(Rgba::BLACK)
        };

        (0..rows)
            .map(|row| {
                let mut line = String::with_capacity(columns as usize * 4);
                match self.mode {
                    TerminalMode::Ascii => {
                        for x in 0..columns {
                            line.push(Self::luma_to_char(sample(x, row).luma()));
                        }
                    }
                    TerminalMode::UnicodeHalfBlock => {
                        for x in 0..columns {
                            let top = sample(x, row * 2);
                            let bottom = sample(x, row * 2 + 1);
                            // ▀ U+2580: foreground is the top pixel, background the bottom
                            let _ = write!(
                                line,
                                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                                top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                            );
                        }
                        line.push_str("\x1b[0m");
                    }
                }
                line
            })
            .collect()
    }

    /// Convert luminance (0.0-1.0) to an ASCII ramp character.
    fn luma_to_char(luma: f32) -> char {
        let last = Self::ASCII_RAMP.len() - 1;
        let idx = (luma * last as f32).round() as usize;
        Self::ASCII_RAMP[idx.min(last)]
    }
}
