//! Box model: outer rect, margin, border, padding, inner content rect.
//!
//! ```text
//! outer ─┬─ margin ─┬─ border (1 cell per enabled side) ─┬─ padding ─ inner
//! ```
//!
//! Positions are relative to the parent's inner origin. All computations are
//! pure functions of the fields.

use crate::geometry::{Borders, Offset, Region, Size, Spacing};

/// Geometry and framing of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxModel {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub margin: Spacing,
    pub border: Borders,
    pub padding: Spacing,
    pub title: String,
}

impl BoxModel {
    /// An unplaced box with the given border.
    pub fn new(border: Borders) -> Self {
        Self { border, ..Self::default() }
    }

    /// The full rectangle the widget occupies in its parent.
    #[inline]
    pub fn outer(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }

    /// Move and resize the outer rectangle. Negative extents clamp to zero.
    #[inline]
    pub fn set_outer(&mut self, origin: Offset, size: Size) {
        let size = size.clamped();
        self.x = origin.x;
        self.y = origin.y;
        self.width = size.width;
        self.height = size.height;
    }

    /// The rectangle the border is drawn on: outer minus margin.
    #[inline]
    pub fn border_rect(&self) -> Region {
        self.outer().shrink(self.margin)
    }

    /// Total thickness on each side: margin + border + padding.
    #[inline]
    pub fn frame(&self) -> Spacing {
        self.margin + self.border.thickness() + self.padding
    }

    /// The content rectangle children and text are laid out in.
    ///
    /// Always contained in [`outer`](Self::outer); collapses to zero size when
    /// the frame is thicker than the box.
    #[inline]
    pub fn inner(&self) -> Region {
        self.outer().shrink(self.frame())
    }
}
