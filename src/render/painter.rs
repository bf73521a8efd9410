//! Painter: transform stack, text helpers, and the repaint path.
//!
//! [`Painter`] owns the surface and the repaint queue. All coordinates passed
//! to its drawing methods are relative to the current translation, which the
//! tree pushes to each widget's inner origin before drawing it.

use tracing::trace;

use super::cell::{Cell, CellStyle};
use super::repaint::{Notifier, RepaintQueue, DEFAULT_REPAINT_CAPACITY};
use super::surface::Surface;
use crate::dom::Tree;
use crate::error::Result;
use crate::geometry::{Offset, Region, Size};
use crate::text::char_width;

/// Drawing front-end over a [`Surface`].
pub struct Painter {
    surface: Box<dyn Surface>,
    transforms: Vec<Offset>,
    queue: RepaintQueue,
    repaints: u64,
}

impl Painter {
    /// Wrap `surface` with the default repaint queue bound.
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self::with_capacity(surface, DEFAULT_REPAINT_CAPACITY)
    }

    /// Wrap `surface` with a repaint queue holding up to `capacity` requests.
    pub fn with_capacity(surface: Box<dyn Surface>, capacity: usize) -> Self {
        Self { surface, transforms: Vec::new(), queue: RepaintQueue::new(capacity), repaints: 0 }
    }

    // ── Transforms ───────────────────────────────────────────────────

    /// Shift the origin by (dx, dy) on top of the current translation.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let next = self.origin() + Offset::new(dx, dy);
        self.transforms.push(next);
    }

    /// Undo the most recent [`translate`](Self::translate).
    pub fn restore(&mut self) {
        self.transforms.pop();
    }

    /// Current absolute origin.
    pub fn origin(&self) -> Offset {
        self.transforms.last().copied().unwrap_or(Offset::ZERO)
    }

    fn absolute(&self, x: i32, y: i32) -> Offset {
        self.origin() + Offset::new(x, y)
    }

    // ── Cells ────────────────────────────────────────────────────────

    /// Surface size.
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// Resize the surface.
    pub fn resize(&mut self, size: Size) {
        self.surface.resize(size);
    }

    /// The cell at local (x, y).
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let p = self.absolute(x, y);
        self.surface.get_cell(p.x, p.y)
    }

    /// Overwrite the cell at local (x, y).
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        let p = self.absolute(x, y);
        self.surface.set_cell(p.x, p.y, cell);
    }

    /// Fill a local region with `ch`.
    pub fn fill(&mut self, region: Region, ch: char, style: CellStyle) {
        let region = region.translate(self.origin());
        self.surface.fill(region, Cell::new(ch, style));
    }

    /// Draw one character, returning how many cells it took (0, 1 or 2).
    ///
    /// Zero-width characters are skipped. A wide glyph also claims the cell to
    /// its right.
    pub fn draw_rune(&mut self, x: i32, y: i32, ch: char, style: CellStyle) -> i32 {
        let width = char_width(ch);
        if width == 0 {
            return 0;
        }
        self.set_cell(x, y, Cell::new(ch, style));
        for dx in 1..width {
            self.set_cell(x + dx, y, Cell::continuation(style));
        }
        width
    }

    /// Draw `text` starting at (x, y), advancing by display width. Returns the
    /// x just past the last cell written. No clipping beyond the surface edge.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: CellStyle) -> i32 {
        text.chars().fold(x, |cx, ch| cx + self.draw_rune(cx, y, ch, style))
    }

    /// [`draw_text`](Self::draw_text) without the end position.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        self.draw_text(x, y, text, style);
    }

    // ── Cursor ───────────────────────────────────────────────────────

    /// Show the terminal cursor at local (x, y).
    pub fn draw_cursor(&mut self, x: i32, y: i32) {
        let p = self.absolute(x, y);
        self.surface.set_cursor(p.x, p.y);
    }

    /// Hide the terminal cursor.
    pub fn hide_cursor(&mut self) {
        self.surface.hide_cursor();
    }

    /// Absolute cursor position, if visible.
    pub fn cursor(&self) -> Option<Offset> {
        self.surface.cursor()
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Start a frame: reset transforms and clear the surface.
    pub fn begin(&mut self) {
        self.transforms.clear();
        self.surface.clear();
    }

    /// Finish a frame: present the surface.
    pub fn end(&mut self) -> Result<()> {
        self.surface.show()
    }

    /// Redraw the whole tree and present it.
    ///
    /// This is the only path that reaches the terminal.
    pub fn repaint(&mut self, tree: &Tree) -> Result<()> {
        self.hide_cursor();
        self.begin();
        tree.draw(self);
        self.end()?;
        self.repaints += 1;
        trace!(frame = self.repaints, "repainted");
        Ok(())
    }

    /// Number of completed repaints.
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// Row `y` of the surface as text.
    pub fn row_text(&self, y: i32) -> Option<String> {
        self.surface.row_text(y)
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    /// Borrow the surface mutably.
    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        self.surface.as_mut()
    }

    // ── Repaint queue ────────────────────────────────────────────────

    /// A sender for deferred repaint requests.
    pub fn notifier(&self) -> Notifier {
        self.queue.notifier()
    }

    /// Wait for repaint requests; returns how many were collapsed into one.
    pub async fn next_requests(&mut self) -> usize {
        self.queue.next_batch().await
    }

    /// Take all pending repaint requests without waiting.
    pub fn drain_requests(&mut self) -> usize {
        self.queue.drain()
    }

    /// Bound of the repaint queue.
    pub fn queue_capacity(&self) -> usize {
        self.queue.capacity()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Screen;

    fn painter(w: i32, h: i32) -> Painter {
        Painter::new(Box::new(Screen::new(Size::new(w, h))))
    }

    // ── Transforms ───────────────────────────────────────────────────

    #[test]
    fn translate_stacks_and_restores() {
        let mut p = painter(10, 5);
        p.translate(2, 1);
        p.translate(3, 1);
        assert_eq!(p.origin(), Offset::new(5, 2));
        p.draw_rune(0, 0, 'x', CellStyle::new());
        p.restore();
        assert_eq!(p.origin(), Offset::new(2, 1));
        p.restore();
        p.restore();
        assert_eq!(p.origin(), Offset::ZERO);
        assert_eq!(p.get_cell(5, 2).map(|c| c.ch), Some('x'));
    }

    // ── Text ─────────────────────────────────────────────────────────

    #[test]
    fn draw_text_advances_by_width() {
        let mut p = painter(8, 1);
        let end = p.draw_text(0, 0, "a日b", CellStyle::new());
        assert_eq!(end, 4);
        assert_eq!(p.row_text(0).as_deref(), Some("a日b    "));
        assert!(p.get_cell(2, 0).unwrap().continuation);
    }

    #[test]
    fn zero_width_is_skipped() {
        let mut p = painter(4, 1);
        assert_eq!(p.draw_text(0, 0, "e\u{0301}x", CellStyle::new()), 2);
        assert_eq!(p.row_text(0).as_deref(), Some("ex  "));
    }

    #[test]
    fn fill_uses_translation() {
        let mut p = painter(4, 2);
        p.translate(1, 1);
        p.fill(Region::new(0, 0, 2, 5), '#', CellStyle::new());
        assert_eq!(p.row_text(0).as_deref(), Some("    "));
        assert_eq!(p.row_text(1).as_deref(), Some(" ## "));
    }

    // ── Cursor ───────────────────────────────────────────────────────

    #[test]
    fn cursor_is_absolute() {
        let mut p = painter(10, 10);
        p.translate(3, 4);
        p.draw_cursor(1, 1);
        assert_eq!(p.cursor(), Some(Offset::new(4, 5)));
        p.hide_cursor();
        assert_eq!(p.cursor(), None);
    }

    // ── Frames & queue ───────────────────────────────────────────────

    #[test]
    fn begin_clears_and_resets() {
        let mut p = painter(3, 1);
        p.translate(1, 0);
        p.draw_text(0, 0, "ab", CellStyle::new());
        p.begin();
        assert_eq!(p.origin(), Offset::ZERO);
        assert_eq!(p.row_text(0).as_deref(), Some("   "));
        assert!(p.end().is_ok());
    }

    #[test]
    fn queue_capacity_is_configurable() {
        let p = Painter::with_capacity(Box::new(Screen::new(Size::new(1, 1))), 7);
        assert_eq!(p.queue_capacity(), 7);
        assert_eq!(painter(1, 1).queue_capacity(), DEFAULT_REPAINT_CAPACITY);
    }

    #[test]
    fn notifier_feeds_drain() {
        let mut p = painter(1, 1);
        let n = p.notifier();
        n.request();
        n.request();
        assert_eq!(p.drain_requests(), 2);
    }
}
