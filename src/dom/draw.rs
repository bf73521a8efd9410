//! Drawing the tree: frames, titles, widget content, children.

use super::node::{Node, WidgetId};
use super::tree::Tree;
use crate::geometry::Region;
use crate::render::{Cell, CellStyle, Painter};
use crate::text::truncate_to_width;
use crate::theme::BorderSymbols;
use crate::widget::DrawContext;

impl Tree {
    /// Draw the whole tree, parents before children.
    ///
    /// Each node is drawn with the painter translated to its parent's inner
    /// origin, which is where its box-model coordinates are measured from.
    pub fn draw(&self, painter: &mut Painter) {
        self.draw_node(self.root(), painter);
    }

    fn draw_node(&self, id: WidgetId, painter: &mut Painter) {
        let Some(node) = self.node(id) else {
            return;
        };
        let theme = self.theme();
        let children = self.children(id);

        if children.is_empty() {
            painter.fill(node.model.outer(), ' ', theme.base);
        }
        if node.model.border.enabled {
            draw_border(painter, node.model.border_rect(), node, &theme.symbols, theme.border);
        }
        draw_title(painter, node, theme.title);

        let inner = node.model.inner();
        painter.translate(inner.x, inner.y);
        {
            let mut ctx = DrawContext::new(painter, theme, inner.size(), node.focused);
            node.widget().draw(&mut ctx);
        }
        for &child in children {
            self.draw_node(child, painter);
        }
        painter.restore();
    }
}

fn draw_border(painter: &mut Painter, rect: Region, node: &Node, symbols: &BorderSymbols, style: CellStyle) {
    if rect.is_empty() {
        return;
    }
    let border = node.model.border;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
    let horizontal = Region::new(left, 0, rect.width, 1);
    let vertical = Region::new(0, top, 1, rect.height);

    if border.top {
        painter.fill(Region { y: top, ..horizontal }, symbols.horizontal, style);
    }
    if border.bottom {
        painter.fill(Region { y: bottom, ..horizontal }, symbols.horizontal, style);
    }
    if border.left {
        painter.fill(Region { x: left, ..vertical }, symbols.vertical, style);
    }
    if border.right {
        painter.fill(Region { x: right, ..vertical }, symbols.vertical, style);
    }

    // Corners only where both adjoining sides are drawn.
    let corners = [
        (border.top && border.left, left, top, symbols.top_left),
        (border.top && border.right, right, top, symbols.top_right),
        (border.bottom && border.left, left, bottom, symbols.bottom_left),
        (border.bottom && border.right, right, bottom, symbols.bottom_right),
    ];
    for (on, x, y, ch) in corners {
        if on {
            painter.set_cell(x, y, Cell::new(ch, style));
        }
    }
}

/// Title sits one cell in from the left corner of the border rect and is
/// clipped so it never covers the right corner.
fn draw_title(painter: &mut Painter, node: &Node, style: CellStyle) {
    let title = node.model.title.as_str();
    if title.is_empty() {
        return;
    }
    let rect = node.model.border_rect();
    if rect.height <= 0 {
        return;
    }
    let visible = truncate_to_width(title, rect.width - 2);
    painter.draw_text(rect.x + 1, rect.y, visible, style);
}

// ===========================================================================
// Tests
// ===========================================================================
