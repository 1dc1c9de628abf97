//! # raster-lab
//!
//! Classical rasterization algorithms and a small immediate-mode canvas to
//! watch them work.
//!
//! ## Features
//!
//! - **Lines**: DDA and Bresenham
//! - **Curves**: midpoint circle (8-way symmetry), polar circle, two-region
//!   midpoint ellipse (4-way symmetry)
//! - **Transforms**: 3x3 homogeneous matrices for translation, scaling and rotation
//! - **Canvas**: `begin`/`vertex`/`end` primitives rasterized into a software
//!   framebuffer, shown in a fullscreen terminal or rendered headless to PNG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use raster_lab::prelude::*;
//!
//! let surface = HeadlessSurface::new(400, 400)?.with_max_frames(1).with_snapshot("logo.png");
//! let canvas = RasterCanvas::new(surface, 1.0)?;
//! let summary = SceneDriver::new(canvas, Unpaced).run(&mut LogoScene::default())?;
//! assert_eq!(summary.frames, 1);
//! # Ok::<(), raster_lab::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A 4(9).
//! - Hearn, D., & Baker, M. P. (1997). *Computer Graphics, C Version*. Prentice Hall.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Integer pixels and homogeneous points.
pub mod geometry;

// ============================================================================
// Algorithms
// ============================================================================

/// Line, circle and ellipse rasterizers.
pub mod raster;

/// Homogeneous 2D transforms.
pub mod transform;

/// Trigonometric tessellation of rectangles, discs and arcs.
pub mod shapes;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Pixel-space fill and plot routines.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

/// Immediate-mode canvas.
pub mod canvas;

/// Presentation surfaces (terminal, headless).
pub mod window;

// ============================================================================
// Application
// ============================================================================

/// Demo scenes and the frame loop.
pub mod scene;

/// YAML configuration.
pub mod config;

/// Command-line interface.
pub mod cli;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-lab operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_lab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Primitive, RasterCanvas};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Pixel, Point};
    pub use crate::raster::LineAlgorithm;
    pub use crate::scene::{
        AngleAccumulator, CurveMode, CurvesScene, FixedInterval, GraphScene, LineScene, LogoScene,
        Scene, SceneDriver, Unpaced, WindmillScene,
    };
    pub use crate::transform::Matrix3;
    pub use crate::window::{HeadlessSurface, Surface, TerminalSurface};
}
