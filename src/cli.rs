//! Command-line interface.
//!
//! Flags override the configuration file, which overrides the defaults.

use crate::config::{BackendKind, Config};
use crate::error::Result;
use crate::output::TerminalMode;
use crate::scene::{CurveMode, CurvesScene, GraphScene, LineRequest, LineScene, LogoScene, Scene, WindmillScene};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// raster-lab: classical rasterization demos
#[derive(Parser, Debug)]
#[command(name = "raster-lab")]
#[command(version)]
#[command(about = "Rasterization and 2D transform demos in the terminal", long_about = None)]
pub struct Cli {
    /// Config file path (defaults to <config_dir>/raster-lab/config.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render offscreen instead of taking over the terminal
    #[arg(long)]
    pub headless: bool,

    /// Terminal cell drawing: halfblock (true color) or ascii (grayscale)
    #[arg(long)]
    pub terminal_mode: Option<TerminalMode>,

    /// Frames to render in headless mode
    #[arg(long)]
    pub frames: Option<u64>,

    /// Write the last headless frame to this PNG file
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Delay between frames in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// World units per pixel (derived from the surface size when unset)
    #[arg(long)]
    pub units_per_pixel: Option<f32>,

    /// Demo to run
    #[command(subcommand)]
    pub demo: Demo,
}

/// Available demos.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Demo {
    /// Tourism-board logo built from filled polygons
    Logo,
    /// Line from endpoints read on stdin, DDA or Bresenham
    Line,
    /// Line graph drawn with Bresenham segments
    Graph,
    /// Midpoint circle, midpoint ellipse or polar circle
    Curves {
        /// Curve to draw: circle, ellipse or polar
        #[arg(long, default_value_t = CurveMode::Ellipse)]
        mode: CurveMode,
    },
    /// Rotating windmill using homogeneous transforms
    Windmill {
        /// Degrees turned per frame
        #[arg(long, allow_negative_numbers = true)]
        step: Option<f32>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `config`, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is out of range.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if self.headless {
            config.window.backend = BackendKind::Headless;
        }
        if let Some(mode) = self.terminal_mode {
            config.window.terminal_mode = mode;
        }
        if let Some(frames) = self.frames {
            config.headless.frames = frames;
        }
        if let Some(path) = &self.snapshot {
            config.headless.snapshot = Some(path.clone());
        }
        if let Some(ms) = self.interval_ms {
            config.animation.frame_interval_ms = Some(ms);
        }
        if let Some(upp) = self.units_per_pixel {
            config.view.units_per_pixel = Some(upp);
        }
        if let Demo::Windmill { step: Some(step) } = self.demo {
            config.animation.angle_step = step;
        }
        config.validate()
    }

    /// Load the configuration this invocation asks for.
    ///
    /// An explicit `--config` must exist; the default location is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, or if the
    /// merged result is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => match Config::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    log::debug!("loading config from {}", path.display());
                    Config::load(path)?
                }
                None => Config::default(),
            },
        };
        self.apply(&mut config)?;
        Ok(config)
    }
}

impl Demo {
    /// Build the scene for this demo.
    ///
    /// The line demo prompts on `prompt` and reads its answers from `input`
    /// before any surface is opened.
    ///
    /// # Errors
    ///
    /// Returns an error if the line demo's input cannot be read or parsed.
    pub fn scene<R: BufRead, W: Write>(&self, config: &Config, input: R, prompt: W) -> Result<Box<dyn Scene>> {
        let scene: Box<dyn Scene> = match self {
            Self::Logo => Box::new(LogoScene::default()),
            Self::Line => Box::new(LineScene::new(LineRequest::read(input, prompt)?)),
            Self::Graph => Box::new(GraphScene::default()),
            Self::Curves { mode } => Box::new(CurvesScene::new(*mode)),
            Self::Windmill { .. } => Box::new(WindmillScene::new(config.animation.angle_step)),
        };
        Ok(scene)
    }
}
