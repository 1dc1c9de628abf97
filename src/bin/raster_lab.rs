//! raster-lab: classical rasterization demos in the terminal.
//!
//! Run: `raster-lab logo`, `raster-lab curves --mode circle`, ...
//! Press `q`, `Esc` or `Ctrl-C` to quit.

use anyhow::{Context, Result};
use clap::Parser;
use raster_lab::canvas::RasterCanvas;
use raster_lab::cli::Cli;
use raster_lab::config::{BackendKind, Config};
use raster_lab::scene::{FixedInterval, Pacer, RunSummary, Scene, SceneDriver, Unpaced};
use raster_lab::window::{HeadlessSurface, Surface, TerminalSurface};
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => log::info!("done after {} frames", summary.frames),
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = cli.load_config().context("loading configuration")?;

    // The line demo reads stdin, so this must happen before the terminal is taken over.
    let mut scene = cli
        .demo
        .scene(&config, io::stdin().lock(), io::stdout())
        .context("reading demo input")?;

    match config.window.backend {
        BackendKind::Terminal => {
            let surface = TerminalSurface::open(scene.name(), config.window.terminal_mode)
                .context("opening terminal surface")?;
            let pacer = FixedInterval(config.frame_interval(scene.frame_interval()));
            drive(surface, pacer, &config, scene.as_mut())
        }
        BackendKind::Headless => {
            let mut surface = HeadlessSurface::new(config.window.width, config.window.height)
                .context("creating headless surface")?
                .with_max_frames(config.headless.frames);
            if let Some(path) = &config.headless.snapshot {
                surface = surface.with_snapshot(path);
            }
            // Headless runs only pace when an interval is asked for explicitly.
            match config.animation.frame_interval_ms {
                Some(_) => {
                    let pacer = FixedInterval(config.frame_interval(scene.frame_interval()));
                    drive(surface, pacer, &config, scene.as_mut())
                }
                None => drive(surface, Unpaced, &config, scene.as_mut()),
            }
        }
    }
}

fn drive<S: Surface, P: Pacer>(surface: S, pacer: P, config: &Config, scene: &mut dyn Scene) -> Result<RunSummary> {
    let (width, height) = surface.resolution();
    let units_per_pixel = config.view.units_per_pixel_for(width, height);
    let canvas = RasterCanvas::new(surface, units_per_pixel)?;

    let summary = SceneDriver::new(canvas, pacer)
        .run(scene)
        .with_context(|| format!("running scene {}", scene.name()))?;
    Ok(summary)
}
