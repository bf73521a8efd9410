//! Surface trait and the in-memory `Screen` cell map.
//!
//! Widgets never write to the terminal directly. Everything is drawn into a
//! [`Surface`]; only [`Surface::show`] pushes a finished frame out, and only
//! the painter's repaint path calls it.

use tracing::trace;

use super::cell::Cell;
use super::driver::Driver;
use crate::error::Result;
use crate::geometry::{Offset, Region, Size};

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A grid of styled cells plus a cursor.
///
/// Out-of-bounds reads return `None` and out-of-bounds writes are dropped.
pub trait Surface: Send {
    /// Current size in cells.
    fn size(&self) -> Size;

    /// Change the size, discarding the current contents.
    fn resize(&mut self, size: Size);

    /// The cell at (x, y), if inside the surface.
    fn get_cell(&self, x: i32, y: i32) -> Option<&Cell>;

    /// Overwrite the cell at (x, y).
    fn set_cell(&mut self, x: i32, y: i32, cell: Cell);

    /// Fill `region` (clipped to the surface) with copies of `cell`.
    fn fill(&mut self, region: Region, cell: Cell) {
        let area = region.intersection(self.size().to_region());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set_cell(x, y, cell);
            }
        }
    }

    /// Reset every cell to blank.
    fn clear(&mut self);

    /// Present the current contents.
    fn show(&mut self) -> Result<()>;

    /// Place the visible cursor at (x, y).
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Hide the cursor.
    fn hide_cursor(&mut self);

    /// Visible cursor position, if any.
    fn cursor(&self) -> Option<Offset>;

    /// Give back any terminal this surface holds. Safe to call repeatedly.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Row `y` as text, skipping continuation cells of wide glyphs.
    fn row_text(&self, y: i32) -> Option<String> {
        if y < 0 || y >= self.size().height {
            return None;
        }
        let row = (0..self.size().width)
            .filter_map(|x| self.get_cell(x, y))
            .filter(|c| !c.continuation)
            .map(|c| c.ch)
            .collect();
        Some(row)
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Row-major in-memory cell map.
///
/// With a [`Driver`] attached, [`show`](Surface::show) writes the full frame to
/// the terminal; without one (headless) it only counts frames.
pub struct Screen {
    size: Size,
    cells: Vec<Cell>,
    cursor: Option<Offset>,
    driver: Option<Driver>,
    frames: u64,
}

impl Screen {
    /// A headless screen of the given size.
    pub fn new(size: Size) -> Self {
        let size = size.clamped();
        Self {
            size,
            cells: vec![Cell::blank(); size.area() as usize],
            cursor: None,
            driver: None,
            frames: 0,
        }
    }

    /// A screen that presents frames through `driver`.
    pub fn with_driver(driver: Driver, size: Size) -> Self {
        Self { driver: Some(driver), ..Self::new(size) }
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether frames go to a real terminal.
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }
}

impl Surface for Screen {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        let size = size.clamped();
        if size == self.size {
            return;
        }
        trace!(width = size.width, height = size.height, "screen resized");
        self.size = size;
        self.cells = vec![Cell::blank(); size.area() as usize];
        self.cursor = None;
    }

    fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    fn show(&mut self) -> Result<()> {
        self.frames += 1;
        if let Some(driver) = self.driver.as_mut() {
            driver.draw_frame(&self.cells, self.size.width as usize, self.cursor)?;
            driver.flush()?;
        }
        Ok(())
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some(Offset::new(x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn cursor(&self) -> Option<Offset> {
        self.cursor
    }

    /// Restore the terminal if a driver is attached.
    fn close(&mut self) -> Result<()> {
        if let Some(driver) = self.driver.as_mut() {
            driver.leave()?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::cell::CellStyle;

    #[test]
    fn new_screen_is_blank() {
        let screen = Screen::new(Size::new(4, 2));
        assert_eq!(screen.size(), Size::new(4, 2));
        assert_eq!(screen.row_text(0).as_deref(), Some("    "));
        assert_eq!(screen.row_text(2), None);
    }

    #[test]
    fn set_and_get_cell() {
        let mut screen = Screen::new(Size::new(3, 3));
        screen.set_cell(1, 2, Cell::new('x', CellStyle::new()));
        assert_eq!(screen.get_cell(1, 2).map(|c| c.ch), Some('x'));
        assert!(screen.get_cell(3, 0).is_none());
        assert!(screen.get_cell(-1, 0).is_none());
    }

    #[test]
    fn out_of_bounds_write_is_dropped() {
        let mut screen = Screen::new(Size::new(2, 1));
        screen.set_cell(5, 0, Cell::new('x', CellStyle::new()));
        assert_eq!(screen.row_text(0).as_deref(), Some("  "));
    }

    #[test]
    fn fill_is_clipped() {
        let mut screen = Screen::new(Size::new(3, 2));
        screen.fill(Region::new(1, 1, 10, 10), Cell::new('#', CellStyle::new()));
        assert_eq!(screen.row_text(0).as_deref(), Some("   "));
        assert_eq!(screen.row_text(1).as_deref(), Some(" ##"));
    }

    #[test]
    fn clear_and_resize() {
        let mut screen = Screen::new(Size::new(2, 2));
        screen.set_cell(0, 0, Cell::new('a', CellStyle::new()));
        screen.clear();
        assert_eq!(screen.get_cell(0, 0).map(|c| c.ch), Some(' '));

        screen.resize(Size::new(5, 1));
        assert_eq!(screen.size(), Size::new(5, 1));
        assert_eq!(screen.row_text(0).as_deref(), Some("     "));
    }

    #[test]
    fn negative_size_clamps() {
        let screen = Screen::new(Size::new(-3, 2));
        assert_eq!(screen.size(), Size::new(0, 2));
    }

    #[test]
    fn show_counts_frames_headless() {
        let mut screen = Screen::new(Size::new(1, 1));
        assert!(!screen.has_driver());
        screen.show().unwrap();
        screen.show().unwrap();
        assert_eq!(screen.frames(), 2);
        assert!(screen.close().is_ok());
    }

    #[test]
    fn cursor_roundtrip() {
        let mut screen = Screen::new(Size::new(10, 10));
        assert_eq!(screen.cursor(), None);
        screen.set_cursor(3, 4);
        assert_eq!(screen.cursor(), Some(Offset::new(3, 4)));
        screen.hide_cursor();
        assert_eq!(screen.cursor(), None);
    }
}
