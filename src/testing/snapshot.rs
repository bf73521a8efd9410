//! Snapshot rendering helpers.
//!
//! Functions for turning a painter's surface, or a whole widget tree, into
//! plain-text strings suitable for snapshot testing and assertions.

use crate::dom::Tree;
use crate::geometry::{Offset, Size};
use crate::render::{Painter, Screen};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The painter's surface as text.
///
/// Each row becomes one line with trailing spaces trimmed. Lines are
/// separated by `'\n'` and the last line has no trailing newline. Wide glyphs
/// appear once.
pub fn screen_to_string(painter: &Painter) -> String {
    let height = painter.size().height;
    if height <= 0 || painter.size().width <= 0 {
        return String::new();
    }
    (0..height)
        .filter_map(|y| painter.row_text(y))
        .map(|row| row.trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lay out a tree rooted at `root` in a `width` x `height` screen, draw it
/// once, and return the result as text.
///
/// # Examples
///
/// ```ignore
/// use cellbox::testing::render_to_string;
/// use cellbox::widgets::Container;
///
/// let output = render_to_string(Container::vertical(), 4, 2);
/// assert_eq!(output, "┌──┐\n└──┘");
/// ```
pub fn render_to_string(root: impl Widget + 'static, width: i32, height: i32) -> String {
    render_tree_to_string(Tree::new(root), width, height)
}

/// Like [`render_to_string`] for a tree that was already built.
pub fn render_tree_to_string(mut tree: Tree, width: i32, height: i32) -> String {
    let size = Size::new(width, height).clamped();
    let root = tree.root();
    tree.resize(root, Offset::ZERO, size);
    let mut painter = Painter::new(Box::new(Screen::new(size)));
    painter.begin();
    tree.draw(&mut painter);
    screen_to_string(&painter)
}

// ===========================================================================
// Tests
// ===========================================================================
