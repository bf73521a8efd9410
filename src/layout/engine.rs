//! Tree layout: hint aggregation, resize, and child placement.
//!
//! A node's hints are its content hints plus its frame. For a node with
//! children the content hint is the children's hints summed along the node's
//! layout axis and maxed across it; a leaf asks its widget. A fixed width or
//! height replaces the computed value on that axis for both hints.
//!
//! Placing children runs [`distribute`] over the inner extent along the layout
//! axis. Every child gets the full inner extent across the axis and is placed
//! relative to the parent's inner origin.

use tracing::trace;

use super::distribute::distribute;
use super::policy::{LayoutMode, SizeHints};
use crate::dom::{Tree, WidgetId};
use crate::geometry::{Offset, Region, Size};

#[derive(Clone, Copy)]
enum Hint {
    Min,
    Preferred,
}

impl Tree {
    /// Smallest outer size `id` should be given.
    pub fn min_size_hint(&self, id: WidgetId) -> Size {
        self.hint(id, Hint::Min)
    }

    /// Outer size `id` would like.
    pub fn size_hint(&self, id: WidgetId) -> Size {
        self.hint(id, Hint::Preferred)
    }

    fn hint(&self, id: WidgetId, kind: Hint) -> Size {
        let Some(node) = self.node(id) else {
            return Size::ZERO;
        };
        let children = self.children(id);
        let content = if children.is_empty() {
            match kind {
                Hint::Min => node.widget().min_size_hint(),
                Hint::Preferred => node.widget().size_hint(),
            }
        } else {
            aggregate(node.layout, children.iter().map(|&child| self.hint(child, kind)))
        };

        let mut hint = content.clamped() + node.model.frame().size();
        if node.fixed.width > 0 {
            hint.width = node.fixed.width;
        }
        if node.fixed.height > 0 {
            hint.height = node.fixed.height;
        }
        hint
    }

    /// Place `id` at `pos` (relative to its parent's inner origin) with outer
    /// `size`, then lay out its children.
    ///
    /// Does nothing and returns `false` when the geometry is unchanged.
    pub fn resize(&mut self, id: WidgetId, pos: Offset, size: Size) -> bool {
        self.place(id, pos, size, false)
    }

    /// Lay out the children of `id` again for its current geometry, all the
    /// way down, even where nothing moved.
    ///
    /// Needed after hints or settings changed without a resize.
    pub fn relayout(&mut self, id: WidgetId) {
        if self.contains(id) {
            self.layout_children(id, true);
        }
    }

    /// Number of child layouts computed so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Store new geometry and lay out the children. With `force`, children
    /// are laid out (and forced further down) even when `id` did not move.
    /// Returns whether the geometry changed.
    fn place(&mut self, id: WidgetId, pos: Offset, size: Size, force: bool) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let changed = node.model.outer() != Region::from_parts(pos, size.clamped());
        if !changed && !force {
            return false;
        }
        if changed {
            node.model.set_outer(pos, size);
            let inner = node.model.inner().size();
            node.widget.resized(inner);
        }
        self.layout_children(id, force);
        changed
    }

    fn layout_children(&mut self, id: WidgetId, force: bool) {
        let Some(node) = self.node(id) else {
            return;
        };
        let children = self.children(id).to_vec();
        if children.is_empty() {
            return;
        }
        let mode = node.layout;
        let inner = node.model.inner().size();

        let items: Vec<SizeHints> = children
            .iter()
            .map(|&child| {
                let (x, y) = self
                    .node(child)
                    .map(|n| (n.policy_x, n.policy_y))
                    .unwrap_or_default();
                SizeHints::new(self.min_size_hint(child), self.size_hint(child), x).with_policies(x, y)
            })
            .collect();
        let extents = distribute(&items, mode.main(inner), mode);
        self.layout_passes += 1;
        trace!(?extents, ?mode, pass = self.layout_passes, "layout pass");

        let cross = mode.cross(inner);
        let mut main = 0;
        for (child, extent) in children.into_iter().zip(extents) {
            let pos = match mode {
                LayoutMode::Horizontal => Offset::new(main, 0),
                LayoutMode::Vertical => Offset::new(0, main),
            };
            main += extent;
            self.place(child, pos, mode.size(extent, cross), force);
        }
    }
}

/// Sum along `mode`, max across it.
fn aggregate(mode: LayoutMode, hints: impl Iterator<Item = Size>) -> Size {
    let (main, cross) = hints.fold((0, 0), |(main, cross), hint| {
        (main + mode.main(hint), cross.max(mode.cross(hint)))
    });
    mode.size(main, cross)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::any::Any;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Spacing;
    use crate::layout::SizePolicy;
    use crate::widget::{Widget, WidgetExt};
    use crate::widgets::{Container, Label};

    /// Leaf with no content hints.
    struct Blank;

    impl Widget for Blank {
        fn widget_type(&self) -> &str {
            "Blank"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn row() -> Tree {
        Tree::new(Container::horizontal().with_border(false))
    }

    fn outer(tree: &Tree, id: WidgetId) -> Region {
        tree.node(id).unwrap().model.outer()
    }

    // ── Hints ────────────────────────────────────────────────────────

    #[test]
    fn hints_aggregate_children_plus_frame() {
        let mut tree = Tree::new(Container::vertical());
        let root = tree.root();
        tree.append(root, Label::new("abc"));
        tree.append(root, Label::new("hello"));

        assert_eq!(tree.size_hint(root), Size::new(7, 4));
        assert_eq!(tree.min_size_hint(root), Size::new(3, 4));
    }

    #[test]
    fn horizontal_hints_sum_widths() {
        let mut tree = row();
        let root = tree.root();
        tree.append(root, Label::new("ab"));
        tree.append(root, Label::new("one\ntwo"));
        assert_eq!(tree.size_hint(root), Size::new(5, 2));
    }

    #[test]
    fn fixed_size_overrides_axis() {
        let mut tree = row();
        let root = tree.root();
        let label = tree.append(root, Label::new("abc")).unwrap();
        tree.set_width(label, 20);
        assert_eq!(tree.size_hint(label), Size::new(20, 1));
        assert_eq!(tree.min_size_hint(label), Size::new(20, 1));
    }

    #[test]
    fn padding_and_margin_add_to_hints() {
        let mut tree = row();
        let root = tree.root();
        let label = tree.append(root, Label::new("ab")).unwrap();
        tree.set_padding(label, Spacing::symmetric(0, 1));
        tree.set_margin(label, Spacing::new(1, 0, 0, 0));
        assert_eq!(tree.size_hint(label), Size::new(4, 2));
    }

    // ── Resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_is_idempotent() {
        let mut tree = row();
        let root = tree.root();
        tree.append(root, Blank);

        assert!(tree.resize(root, Offset::ZERO, Size::new(10, 3)));
        let passes = tree.layout_passes();
        assert!(!tree.resize(root, Offset::ZERO, Size::new(10, 3)));
        assert_eq!(tree.layout_passes(), passes);
        assert!(tree.resize(root, Offset::ZERO, Size::new(11, 3)));
        assert!(tree.layout_passes() > passes);
    }

    #[test]
    fn minimum_then_expanding() {
        let mut tree = row();
        let root = tree.root();
        let fixed = tree.append(root, Blank).unwrap();
        let grow = tree.append(root, Blank).unwrap();
        tree.set_width(fixed, 3);

        tree.resize(root, Offset::ZERO, Size::new(10, 1));
        assert_eq!(outer(&tree, fixed), Region::new(0, 0, 3, 1));
        assert_eq!(outer(&tree, grow), Region::new(3, 0, 7, 1));

        tree.resize(root, Offset::ZERO, Size::new(2, 1));
        assert_eq!(outer(&tree, fixed).width, 2);
        assert_eq!(outer(&tree, grow).width, 0);
    }

    #[test]
    fn vertical_split_inside_border() {
        let mut tree = Tree::new(Container::vertical());
        let root = tree.root();
        let a = tree.append(root, Blank).unwrap();
        let b = tree.append(root, Blank).unwrap();

        tree.resize(root, Offset::ZERO, Size::new(10, 6));
        assert_eq!(outer(&tree, a), Region::new(0, 0, 8, 2));
        assert_eq!(outer(&tree, b), Region::new(0, 2, 8, 2));
        assert_eq!(tree.inner_real(b), Region::new(1, 3, 8, 2));
    }

    #[test]
    fn frame_larger_than_box_collapses_inner() {
        let mut tree = Tree::new(Container::vertical());
        let root = tree.root();
        let child = tree.append(root, Blank).unwrap();
        tree.resize(root, Offset::ZERO, Size::new(1, 1));
        assert_eq!(tree.node(root).unwrap().model.inner().size(), Size::ZERO);
        assert_eq!(outer(&tree, child).size(), Size::ZERO);
    }

    // ── Relayout ─────────────────────────────────────────────────────

    #[test]
    fn relayout_picks_up_setting_changes() {
        let mut tree = row();
        let root = tree.root();
        let first = tree.append(root, Blank).unwrap();
        let second = tree.append(root, Blank).unwrap();
        tree.set_size_policy(second, SizePolicy::Preferred, SizePolicy::Expanding);
        tree.resize(root, Offset::ZERO, Size::new(10, 1));
        assert_eq!(outer(&tree, first).width, 10);

        tree.set_width(second, 4);
        tree.relayout(root);
        assert_eq!(outer(&tree, first).width, 6);
        assert_eq!(outer(&tree, second), Region::new(6, 0, 4, 1));
    }

    #[test]
    fn relayout_reaches_unmoved_grandchildren() {
        let mut tree = row();
        let root = tree.root();
        let inner = tree.append(root, Container::horizontal().with_border(false)).unwrap();
        let a = tree.append(inner, Blank).unwrap();
        let b = tree.append(inner, Blank).unwrap();
        tree.resize(root, Offset::ZERO, Size::new(8, 1));
        assert_eq!(outer(&tree, a).width, 4);

        tree.set_width(b, 1);
        tree.relayout(root);
        assert_eq!(outer(&tree, a).width, 7);
        assert_eq!(outer(&tree, b), Region::new(7, 0, 1, 1));
    }

    #[test]
    fn relayout_reaches_below_a_moved_node() {
        let mut tree = Tree::new(Container::vertical().with_border(false));
        let root = tree.root();
        let top = tree.append(root, Blank).unwrap();
        let middle = tree.append(root, Container::vertical().with_border(false)).unwrap();
        let strip = tree.append(middle, Container::horizontal().with_border(false)).unwrap();
        let left = tree.append(strip, Blank).unwrap();
        let right = tree.append(strip, Blank).unwrap();
        tree.append(root, Blank);
        tree.set_height(top, 1);
        tree.set_height(middle, 2);
        tree.set_size_policy(middle, SizePolicy::Expanding, SizePolicy::Maximum);
        tree.resize(root, Offset::ZERO, Size::new(8, 4));
        assert_eq!(outer(&tree, middle), Region::new(0, 1, 8, 2));
        assert_eq!((outer(&tree, left).width, outer(&tree, right).width), (4, 4));

        // `middle` moves down without changing size; `strip` keeps its
        // relative geometry but its children's hints changed.
        tree.set_height(top, 2);
        tree.set_width(right, 1);
        tree.relayout(root);
        assert_eq!(outer(&tree, middle), Region::new(0, 2, 8, 2));
        assert_eq!(outer(&tree, strip), Region::new(0, 0, 8, 2));
        assert_eq!((outer(&tree, left).width, outer(&tree, right).width), (7, 1));
        assert_eq!(tree.inner_real(right), Region::new(7, 2, 1, 2));
    }
}
