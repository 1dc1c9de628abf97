//! Immediate-mode drawing canvas.
//!
//! Scenes describe geometry as `begin(kind)`, a run of `vertex(x, y)` calls,
//! then `end()`. Vertices are world coordinates: origin at the center of the
//! surface, y pointing up, `units_per_pixel` world units across one pixel.
//! Point sizes and line widths are world units as well, never below one pixel.
//!
//! [`RasterCanvas`] rasterizes each primitive into a [`Framebuffer`] as soon as
//! it ends and hands the finished frame to a [`Surface`] on `present()`.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Pixel, Point};
use crate::render;
use crate::window::Surface;

/// How a run of vertices is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Each vertex is a square point.
    Points,
    /// Independent segments from vertex pairs.
    Lines,
    /// Connected segments through every vertex.
    LineStrip,
    /// One filled polygon.
    Polygon,
    /// Independent filled triangles from vertex triples.
    Triangles,
    /// Filled triangles sharing the first vertex.
    TriangleFan,
    /// Filled triangles over each consecutive vertex triple.
    TriangleStrip,
    /// Independent filled quadrilaterals from groups of four.
    Quads,
}

/// Immediate-mode drawing target.
pub trait Canvas {
    /// Start collecting vertices for a primitive.
    fn begin(&mut self, kind: Primitive);

    /// Add a vertex to the open primitive.
    fn vertex(&mut self, x: f32, y: f32);

    /// Finish and draw the open primitive.
    fn end(&mut self);

    /// Current drawing color from unit components.
    fn set_color(&mut self, r: f32, g: f32, b: f32);

    /// Side of subsequent points, in world units.
    fn set_point_size(&mut self, size: f32);

    /// Width of subsequent lines, in world units.
    fn set_line_width(&mut self, width: f32);

    /// Fill the whole frame with the clear color.
    fn clear(&mut self);

    /// Color used by [`Canvas::clear`].
    fn set_clear_color(&mut self, r: f32, g: f32, b: f32);

    /// Show the finished frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot display the frame.
    fn present(&mut self) -> Result<()>;

    /// Process pending input; may request close.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to read events.
    fn poll_events(&mut self) -> Result<()>;

    /// Whether the frame loop should stop.
    fn should_close(&self) -> bool;

    /// Request (or cancel) close from scene code.
    fn set_should_close(&mut self, close: bool);

    /// Surface size in pixels.
    fn resolution(&self) -> (u32, u32);

    /// Release the underlying surface after the last frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to shut down cleanly.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }

    /// Draw integer world coordinates as points.
    fn plot(&mut self, pixels: &[Pixel]) {
        self.begin(Primitive::Points);
        for p in pixels {
            self.vertex(p.x as f32, p.y as f32);
        }
        self.end();
    }

    /// Draw a whole vertex list as one primitive.
    fn draw(&mut self, kind: Primitive, points: &[Point]) {
        self.begin(kind);
        for p in points {
            self.vertex(p.x, p.y);
        }
        self.end();
    }
}

/// Orthographic world-to-pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    units_per_pixel: f32,
}

impl Viewport {
    /// Mapping for a `width x height` surface. Non-positive scales fall back to 1.
    #[must_use]
    pub fn new(width: u32, height: u32, units_per_pixel: f32) -> Self {
        let units_per_pixel =
            if units_per_pixel.is_finite() && units_per_pixel > 0.0 { units_per_pixel } else { 1.0 };
        Self { width, height, units_per_pixel }
    }

    /// World units across one pixel.
    #[must_use]
    pub const fn units_per_pixel(&self) -> f32 {
        self.units_per_pixel
    }

    /// Continuous pixel position of a world coordinate.
    #[must_use]
    pub fn to_pixel(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.width as f32 / 2.0 + x / self.units_per_pixel,
            self.height as f32 / 2.0 - y / self.units_per_pixel,
        )
    }

    /// World length in pixels, at least one.
    #[must_use]
    pub fn to_pixel_len(&self, len: f32) -> f32 {
        (len / self.units_per_pixel).max(1.0)
    }
}

/// Framebuffer-backed [`Canvas`] presenting to a [`Surface`].
pub struct RasterCanvas<S: Surface> {
    surface: S,
    frame: Framebuffer,
    viewport: Viewport,
    clear_color: Rgba,
    color: Rgba,
    point_size: f32,
    line_width: f32,
    open: Option<Primitive>,
    vertices: Vec<(f32, f32)>,
    should_close: bool,
}

impl<S: Surface> RasterCanvas<S> {
    /// Canvas covering the whole surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface reports a zero resolution.
    pub fn new(surface: S, units_per_pixel: f32) -> Result<Self> {
        let (width, height) = surface.resolution();
        let frame = Framebuffer::new(width, height)?;
        log::debug!("canvas {width}x{height} px, {units_per_pixel} units/px");
        Ok(Self {
            surface,
            frame,
            viewport: Viewport::new(width, height, units_per_pixel),
            clear_color: Rgba::BLACK,
            color: Rgba::WHITE,
            point_size: 1.0,
            line_width: 1.0,
            open: None,
            vertices: Vec::new(),
            should_close: false,
        })
    }

    /// World-to-pixel mapping in use.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The frame being drawn.
    #[must_use]
    pub const fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// The surface frames are presented to.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, e.g. to inspect a headless run.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn flush(&mut self, kind: Primitive) {
        let vertices = std::mem::take(&mut self.vertices);
        let fb = &mut self.frame;
        let color = self.color;

        match kind {
            Primitive::Points => {
                let size = self.viewport.to_pixel_len(self.point_size);
                for &(x, y) in &vertices {
                    render::draw_point(fb, x, y, size, color);
                }
            }
            Primitive::Lines | Primitive::LineStrip => {
                let width = self.viewport.to_pixel_len(self.line_width);
                let segment = |fb: &mut Framebuffer, a: (f32, f32), b: (f32, f32)| {
                    render::draw_line(fb, snap(a), snap(b), width, color);
                };
                if kind == Primitive::Lines {
                    for pair in vertices.chunks_exact(2) {
                        segment(fb, pair[0], pair[1]);
                    }
                } else {
                    for pair in vertices.windows(2) {
                        segment(fb, pair[0], pair[1]);
                    }
                }
            }
            Primitive::Polygon => render::fill_polygon(fb, &vertices, color),
            Primitive::Triangles => {
                for t in vertices.chunks_exact(3) {
                    render::fill_triangle(fb, t[0], t[1], t[2], color);
                }
            }
            Primitive::TriangleFan => {
                if let Some((&hub, rim)) = vertices.split_first() {
                    for pair in rim.windows(2) {
                        render::fill_triangle(fb, hub, pair[0], pair[1], color);
                    }
                }
            }
            Primitive::TriangleStrip => {
                for t in vertices.windows(3) {
                    render::fill_triangle(fb, t[0], t[1], t[2], color);
                }
            }
            Primitive::Quads => {
                for quad in vertices.chunks_exact(4) {
                    render::fill_polygon(fb, quad, color);
                }
            }
        }

        // Reuse the allocation for the next primitive.
        self.vertices = vertices;
        self.vertices.clear();
    }
}

/// Pixel containing a continuous pixel position.
fn snap((x, y): (f32, f32)) -> Pixel {
    Pixel::new(x.floor() as i32, y.floor() as i32)
}

impl<S: Surface> Canvas for RasterCanvas<S> {
    fn begin(&mut self, kind: Primitive) {
        if let Some(previous) = self.open.replace(kind) {
            log::warn!("begin({kind:?}) while {previous:?} is open; drawing it first");
            self.flush(previous);
        }
    }

    fn vertex(&mut self, x: f32, y: f32) {
        if self.open.is_none() {
            log::debug!("vertex ({x}, {y}) outside begin/end ignored");
            return;
        }
        self.vertices.push(self.viewport.to_pixel(x, y));
    }

    fn end(&mut self) {
        match self.open.take() {
            Some(kind) => self.flush(kind),
            None => log::debug!("end() without begin() ignored"),
        }
    }

    fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.color = Rgba::from_unit(r, g, b);
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = size;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn clear(&mut self) {
        self.frame.clear(self.clear_color);
    }

    fn set_clear_color(&mut self, r: f32, g: f32, b: f32) {
        self.clear_color = Rgba::from_unit(r, g, b);
    }

    fn present(&mut self) -> Result<()> {
        self.surface.present(&self.frame)
    }

    fn poll_events(&mut self) -> Result<()> {
        self.surface.poll_events()?;
        if self.surface.close_requested() {
            self.should_close = true;
        }
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, close: bool) {
        self.should_close = close;
    }

    fn resolution(&self) -> (u32, u32) {
        (self.frame.width(), self.frame.height())
    }

    fn release(&mut self) -> Result<()> {
        self.surface.release()
    }
}
