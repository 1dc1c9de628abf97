//! Interactive line demo: endpoints and algorithm come from standard input.

use super::Scene;
use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::Pixel;
use crate::raster::LineAlgorithm;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Largest accepted endpoint magnitude for the line demo.
///
/// The rasterizers emit one pixel per step along the major axis, so this also
/// caps a request at about two million pixels.
pub const MAX_COORDINATE: i32 = 1 << 20;

/// Endpoints and algorithm selector read from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    /// First endpoint.
    pub start: Pixel,
    /// Second endpoint.
    pub end: Pixel,
    /// `1` for DDA, `2` for Bresenham; anything else closes the demo.
    pub selector: i64,
}

impl LineRequest {
    /// Prompt on `prompt` and read three answers from `input`.
    ///
    /// Answers are whitespace separated and may span lines in any layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on end of input, a non-integer token or
    /// a coordinate outside `±MAX_COORDINATE`, and [`Error::Io`] if reading or
    /// prompting fails.
    pub fn read<R: BufRead, W: Write>(input: R, mut prompt: W) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        write!(prompt, "Enter starting points (x0, y0): ")?;
        prompt.flush()?;
        let start = Pixel::new(tokens.next_coordinate()?, tokens.next_coordinate()?);

        write!(prompt, "Enter ending points (x1, y1): ")?;
        prompt.flush()?;
        let end = Pixel::new(tokens.next_coordinate()?, tokens.next_coordinate()?);

        writeln!(prompt, "Choose algorithm:")?;
        writeln!(prompt, "1. DDA Algorithm")?;
        writeln!(prompt, "2. Bresenham Algorithm")?;
        prompt.flush()?;
        let selector = tokens.next_int()?;

        Ok(Self { start, end, selector })
    }

    /// The algorithm the selector names, if any.
    #[must_use]
    pub fn algorithm(&self) -> Option<LineAlgorithm> {
        LineAlgorithm::from_selector(self.selector)
    }
}

/// Whitespace-separated integer tokens pulled lazily from a reader.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    fn next_int<T: std::str::FromStr>(&mut self) -> Result<T> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InvalidInput("unexpected end of input".to_string()));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        let token = self.pending.pop_front().unwrap_or_default();
        token.parse().map_err(|_| Error::InvalidInput(format!("expected an integer, got {token:?}")))
    }

    fn next_coordinate(&mut self) -> Result<i32> {
        let value: i32 = self.next_int()?;
        if value.unsigned_abs() > MAX_COORDINATE.unsigned_abs() {
            return Err(Error::InvalidInput(format!(
                "coordinate {value} is outside -{MAX_COORDINATE}..={MAX_COORDINATE}"
            )));
        }
        Ok(value)
    }
}

/// Draws the requested line as black points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScene {
    request: LineRequest,
    pixels: Vec<Pixel>,
}

impl LineScene {
    /// Rasterize the request up front; an unknown selector yields no pixels.
    #[must_use]
    pub fn new(request: LineRequest) -> Self {
        let pixels = request
            .algorithm()
            .map(|alg| alg.rasterize(request.start, request.end))
            .unwrap_or_default();
        Self { request, pixels }
    }

    /// Rasterized pixels in world coordinates.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Scene for LineScene {
    fn name(&self) -> &str {
        "line"
    }

    fn setup(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_clear_color(1.0, 1.0, 1.0);
        if self.request.algorithm().is_none() {
            log::warn!("unknown algorithm {}, closing", self.request.selector);
            canvas.set_should_close(true);
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_color(0.0, 0.0, 0.0);
        canvas.plot(&self.pixels);
    }
}
