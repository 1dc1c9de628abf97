//! Configuration for the demo runner.
//!
//! YAML file with precedence: CLI > file > defaults. Every field is optional in
//! the file.
//!
//! ```yaml
//! window:
//!   backend: headless
//!   terminal_mode: halfblock
//!   width: 800
//!   height: 600
//! view:
//!   min_extent: 480
//! animation:
//!   frame_interval_ms: 500
//!   angle_step: 1.0
//! headless:
//!   frames: 1
//!   snapshot: frame.png
//! ```

use crate::error::{Error, Result};
use crate::output::TerminalMode;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which surface presents the frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Fullscreen terminal (alternate screen).
    #[default]
    Terminal,
    /// Offscreen framebuffer, optionally snapshotted to PNG.
    Headless,
}

/// Surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Presentation backend.
    #[serde(default)]
    pub backend: BackendKind,

    /// How the terminal backend draws cells: `halfblock` or `ascii`.
    #[serde(default)]
    pub terminal_mode: TerminalMode,

    /// Headless surface width in pixels. The terminal uses its own size.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Headless surface height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            terminal_mode: TerminalMode::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// World-to-pixel mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Fixed world units per pixel. When unset it is derived from `min_extent`.
    #[serde(default)]
    pub units_per_pixel: Option<f32>,

    /// World extent that must fit across the shorter surface axis.
    #[serde(default = "default_min_extent")]
    pub min_extent: f32,
}

fn default_min_extent() -> f32 {
    480.0
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { units_per_pixel: None, min_extent: default_min_extent() }
    }
}

impl ViewConfig {
    /// World units per pixel for a surface of the given resolution.
    ///
    /// Never below 1, so large surfaces show the scene at its native scale.
    #[must_use]
    pub fn units_per_pixel_for(&self, width: u32, height: u32) -> f32 {
        if let Some(upp) = self.units_per_pixel {
            return upp;
        }
        let shorter = width.min(height).max(1) as f32;
        (self.min_extent / shorter).max(1.0)
    }
}

/// Frame pacing and animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Delay between frames. Each scene has its own default when unset.
    #[serde(default)]
    pub frame_interval_ms: Option<u64>,

    /// Degrees added to the windmill angle per frame.
    #[serde(default = "default_angle_step")]
    pub angle_step: f32,
}

fn default_angle_step() -> f32 {
    1.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { frame_interval_ms: None, angle_step: default_angle_step() }
    }
}

/// Headless run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessConfig {
    /// Frames to render before the surface closes itself.
    #[serde(default = "default_frames")]
    pub frames: u64,

    /// Where to write the last frame as PNG.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_frames() -> u64 {
    1
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self { frames: default_frames(), snapshot: None }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Surface settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// World-to-pixel mapping.
    #[serde(default)]
    pub view: ViewConfig,

    /// Pacing and animation.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Headless runs.
    #[serde(default)]
    pub headless: HeadlessConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            window: WindowConfig::default(),
            view: ViewConfig::default(),
            animation: AnimationConfig::default(),
            headless: HeadlessConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] if it exists but cannot be read, and a parse or
    /// validation error otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a validation error.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Default config location: `<config_dir>/raster-lab/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("raster-lab").join("config.yaml"))
    }

    /// Frame interval, falling back to the scene's own default.
    #[must_use]
    pub fn frame_interval(&self, scene_default: Duration) -> Duration {
        self.animation.frame_interval_ms.map_or(scene_default, Duration::from_millis)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Err(Error::ConfigParse { line: 0, message: message.to_string() });

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window.width and window.height must be positive");
        }
        if let Some(upp) = self.view.units_per_pixel {
            if !(upp.is_finite() && upp > 0.0) {
                return invalid("view.units_per_pixel must be a positive number");
            }
        }
        if !(self.view.min_extent.is_finite() && self.view.min_extent > 0.0) {
            return invalid("view.min_extent must be a positive number");
        }
        if !self.animation.angle_step.is_finite() {
            return invalid("animation.angle_step must be finite");
        }
        Ok(())
    }
}
