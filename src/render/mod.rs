//! Rasterization of canvas primitives into a framebuffer.
//!
//! Provides pixel-space point, line and polygon fill routines used by the
//! framebuffer-backed canvas.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: non-antialiased lines, square brush for wide lines
//! - **Scanline Fill**: even-odd polygon fill sampled at pixel centers

mod primitives;

pub use primitives::{draw_line, draw_pixels, draw_point, fill_polygon, fill_triangle};
