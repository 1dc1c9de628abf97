//! Fullscreen terminal surface.
//!
//! Takes over the terminal with raw mode and the alternate screen. In the
//! default half-block mode each text cell shows two vertically stacked pixels,
//! so the resolution is `columns x 2 * rows`; ASCII mode uses one pixel per
//! cell. The terminal is restored on [`Surface::release`] or on
//! drop, whichever comes first.

use super::Surface;
use crate::error::{InitError, Result};
use crate::framebuffer::Framebuffer;
use crate::output::{TerminalEncoder, TerminalMode};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use std::io::{stdout, IsTerminal, Stdout, Write};
use std::time::Duration;

/// Alternate-screen surface sized to the terminal.
pub struct TerminalSurface {
    out: Stdout,
    columns: u16,
    rows: u16,
    mode: TerminalMode,
    encoder: TerminalEncoder,
    close_requested: bool,
    active: bool,
}

impl TerminalSurface {
    /// Take over the terminal, drawing cells in `mode`.
    ///
    /// # Errors
    ///
    /// - [`InitError::NoBackend`] if stdout is not a terminal
    /// - [`InitError::NoMonitor`] if the terminal size cannot be queried
    /// - [`InitError::NoVideoMode`] if the terminal reports a zero size
    /// - [`InitError::WindowCreation`] if raw mode or the alternate screen fails
    pub fn open(title: &str, mode: TerminalMode) -> Result<Self> {
        let mut out = stdout();
        if !out.is_terminal() {
            return Err(InitError::NoBackend.into());
        }

        let (columns, rows) = terminal::size().map_err(InitError::NoMonitor)?;
        if columns == 0 || rows == 0 {
            return Err(InitError::NoVideoMode {
                width: u32::from(columns),
                height: u32::from(rows) * mode.pixels_per_row(),
            }
            .into());
        }

        enable_raw_mode().map_err(|e| InitError::WindowCreation(format!("raw mode: {e}")))?;
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, SetTitle(title)) {
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(InitError::WindowCreation(format!("alternate screen: {e}")).into());
        }

        log::info!("terminal surface {columns}x{rows} cells, {mode} mode");
        let encoder = TerminalEncoder::new()
            .mode(mode)
            .columns(u32::from(columns))
            .rows(u32::from(rows));

        Ok(Self { out, columns, rows, mode, encoder, close_requested: false, active: true })
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn resolution(&self) -> (u32, u32) {
        (
            u32::from(self.columns),
            u32::from(self.rows) * self.mode.pixels_per_row(),
        )
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        for (row, line) in (0u16..).zip(self.encoder.render_rows(frame)) {
            queue!(self.out, MoveTo(0, row), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn poll_events(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if is_close_key(&event) {
                log::debug!("close requested by {event:?}");
                self.close_requested = true;
            }
        }
        Ok(())
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn release(&mut self) -> Result<()> {
        self.restore()
    }
}

/// `q`, `Esc` and `Ctrl-C` close the surface.
fn is_close_key(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}
