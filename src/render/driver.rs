//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered stdout writer and provides methods for entering
//! and leaving UI mode (raw mode + alternate screen), writing whole frames from
//! a [`Screen`](super::surface::Screen), and controlling the cursor.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

use super::cell::{Cell, CellStyle};
use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// The driver does NOT touch the terminal on creation; call [`enter`](Self::enter)
/// explicitly. Dropping a driver that is still in UI mode restores the terminal.
pub struct Driver {
    writer: BufWriter<Stdout>,
    active: bool,
    mouse: bool,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> Self {
        Self { writer: BufWriter::new(io::stdout()), active: false, mouse: false }
    }

    /// Enable raw mode, enter the alternate screen and optionally capture the mouse.
    ///
    /// On failure everything already switched on is switched back off before
    /// the error is returned.
    pub fn enter(&mut self, mouse: bool) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let entered = if mouse {
            execute!(self.writer, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
        } else {
            execute!(self.writer, EnterAlternateScreen, cursor::Hide)
        };
        if let Err(err) = entered {
            let _ = execute!(self.writer, LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        self.active = true;
        self.mouse = mouse;
        debug!(mouse, "terminal entered ui mode");
        Ok(())
    }

    /// Restore the terminal: leave the alternate screen and disable raw mode.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.mouse {
            execute!(self.writer, DisableMouseCapture)?;
        }
        execute!(self.writer, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        debug!("terminal restored");
        Ok(())
    }

    /// Whether the terminal is currently in UI mode.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Queue a full frame: every row of `cells` (row-major, `width` wide) is
    /// written from column 0. Continuation cells of wide glyphs are skipped.
    ///
    /// Call [`flush`](Self::flush) afterward to send to the terminal.
    pub fn draw_frame(&mut self, cells: &[Cell], width: usize, cursor: Option<Offset>) -> io::Result<()> {
        queue!(self.writer, cursor::Hide, Clear(ClearType::All))?;
        if width > 0 {
            for (row, line) in cells.chunks(width).enumerate() {
                queue!(self.writer, cursor::MoveTo(0, row as u16))?;
                for cell in line.iter().filter(|c| !c.continuation) {
                    self.apply_cell_style(&cell.style)?;
                    queue!(self.writer, Print(cell.ch), SetAttribute(Attribute::Reset), ResetColor)?;
                }
            }
        }
        if let Some(pos) = cursor {
            if pos.x >= 0 && pos.y >= 0 {
                queue!(self.writer, cursor::MoveTo(pos.x as u16, pos.y as u16), cursor::Show)?;
            }
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Queue crossterm style commands for a given `CellStyle`.
    fn apply_cell_style(&mut self, style: &CellStyle) -> io::Result<()> {
        if let Some(fg) = style.fg {
            queue!(self.writer, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.writer, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if style.italic {
            queue!(self.writer, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(self.writer, SetAttribute(Attribute::Underlined))?;
        }
        if style.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
