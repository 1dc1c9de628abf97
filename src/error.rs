//! Error types for raster-lab operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a drawing surface could not be brought up.
///
/// Every variant aborts startup; callers never continue with a half-initialized
/// surface.
#[derive(Error, Debug)]
pub enum InitError {
    /// No usable display backend (stdout is not attached to a terminal).
    #[error("no display backend available: stdout is not a terminal")]
    NoBackend,

    /// The primary display could not be queried.
    #[error("failed to query the primary display: {0}")]
    NoMonitor(#[source] io::Error),

    /// The display reported an unusable mode.
    #[error("display reported an unusable mode: {width}x{height}")]
    NoVideoMode {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },

    /// The fullscreen surface could not be created.
    #[error("failed to create the fullscreen surface: {0}")]
    WindowCreation(String),
}

/// Errors that can occur in raster-lab operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Surface initialization failure.
    #[error("initialization failed: {0}")]
    Init(#[from] InitError),

    /// I/O error (file operations, terminal writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Malformed interactive input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
