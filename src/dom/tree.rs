//! The widget tree: structure, node settings, absolute geometry.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};
use tracing::trace;

use super::node::{Node, WidgetId};
use crate::geometry::{Borders, Offset, Region, Spacing};
use crate::layout::{LayoutMode, SizePolicy};
use crate::render::Notifier;
use crate::theme::Theme;
use crate::widget::traits::fixed_policy;
use crate::widget::Widget;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// A strict tree of widgets, backed by a slotmap arena.
///
/// The tree always has a root. Children are kept in insertion order, which is
/// also layout, draw and event order. Parent links are plain ids used for
/// geometry lookups only; removing a child frees its whole subtree, so no
/// dangling link survives.
pub struct Tree {
    nodes: SlotMap<WidgetId, Node>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: WidgetId,
    theme: Theme,
    notifier: Option<Notifier>,
    pub(crate) layout_passes: u64,
}

impl Tree {
    /// Create a tree around `root` using the default theme.
    pub fn new(root: impl Widget + 'static) -> Self {
        Self::with_theme(root, Theme::default())
    }

    /// Create a tree around `root` drawing with `theme`.
    pub fn with_theme(root: impl Widget + 'static, theme: Theme) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(Box::new(root)));
        let mut children = SecondaryMap::new();
        children.insert(root, Vec::new());
        Self { nodes, children, parent: SecondaryMap::new(), root, theme, notifier: None, layout_passes: 0 }
    }

    /// The root widget.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// The theme used for drawing.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Hand every current and future widget a repaint notifier.
    pub fn attach(&mut self, notifier: Notifier) {
        for node in self.nodes.values_mut() {
            node.widget.attach(notifier.clone());
        }
        self.notifier = Some(notifier);
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Add `widget` as the last child of `parent`.
    ///
    /// Returns `None` (and drops the widget) if `parent` is not in the tree.
    pub fn append(&mut self, parent: WidgetId, widget: impl Widget + 'static) -> Option<WidgetId> {
        let index = self.len(parent);
        self.insert(parent, index, widget)
    }

    /// Add `widget` as the first child of `parent`.
    pub fn prepend(&mut self, parent: WidgetId, widget: impl Widget + 'static) -> Option<WidgetId> {
        self.insert(parent, 0, widget)
    }

    /// Insert `widget` so it becomes child number `index` of `parent`.
    ///
    /// An index past the end is ignored: nothing is inserted and `None` is
    /// returned.
    pub fn insert(
        &mut self,
        parent: WidgetId,
        index: usize,
        widget: impl Widget + 'static,
    ) -> Option<WidgetId> {
        self.insert_boxed(parent, index, Box::new(widget))
    }

    /// [`insert`](Self::insert) for an already boxed widget.
    pub fn insert_boxed(
        &mut self,
        parent: WidgetId,
        index: usize,
        mut widget: Box<dyn Widget>,
    ) -> Option<WidgetId> {
        let len = self.children.get(parent)?.len();
        if index > len {
            trace!(index, len, "insert out of range ignored");
            return None;
        }
        if let Some(notifier) = &self.notifier {
            widget.attach(notifier.clone());
        }
        let id = self.nodes.insert(Node::new(widget));
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.insert(index, id);
        }
        Some(id)
    }

    /// Remove child number `index` of `parent` together with its subtree.
    ///
    /// An index out of range is ignored. Returns whether a child was removed.
    pub fn remove(&mut self, parent: WidgetId, index: usize) -> bool {
        let Some(siblings) = self.children.get_mut(parent) else {
            return false;
        };
        if index >= siblings.len() {
            trace!(index, len = siblings.len(), "remove out of range ignored");
            return false;
        }
        let id = siblings.remove(index);
        self.free_subtree(id);
        true
    }

    /// Drop `id` and all its descendants from the arena.
    fn free_subtree(&mut self, id: WidgetId) {
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            self.nodes.remove(current);
        }
    }

    /// Number of children of `parent` (0 if it does not exist).
    pub fn len(&self, parent: WidgetId) -> usize {
        self.children(parent).len()
    }

    /// Total number of widgets, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree contains `id`.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Children of `id` in order. Empty if it has none or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Parent of `id`; `None` for the root.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    // -----------------------------------------------------------------------
    // Node access
    // -----------------------------------------------------------------------

    /// The node for `id`.
    pub fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// The widget at `id`, downcast to `W`.
    pub fn widget<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.nodes.get(id)?.widget.as_any().downcast_ref::<W>()
    }

    /// The widget at `id`, downcast to `W`, mutably.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.nodes.get_mut(id)?.widget.as_any_mut().downcast_mut::<W>()
    }

    // -----------------------------------------------------------------------
    // Node settings
    // -----------------------------------------------------------------------

    fn update(&mut self, id: WidgetId, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.nodes.get_mut(id) {
            f(node);
        }
    }

    /// Switch the border on or off, keeping its side selection.
    pub fn set_border(&mut self, id: WidgetId, enabled: bool) {
        self.update(id, |n| n.model.border = n.model.border.with_enabled(enabled));
    }

    /// Replace the border configuration.
    pub fn set_border_sides(&mut self, id: WidgetId, borders: Borders) {
        self.update(id, |n| n.model.border = borders);
    }

    /// Set the title drawn on the top border.
    pub fn set_title(&mut self, id: WidgetId, title: impl Into<String>) {
        let title = title.into();
        self.update(id, |n| n.model.title = title);
    }

    /// Fix the outer width. Non-zero makes the horizontal policy `Minimum`,
    /// zero clears the fixed width and makes it `Expanding`.
    pub fn set_width(&mut self, id: WidgetId, width: i32) {
        let width = width.max(0);
        self.update(id, |n| {
            n.fixed.width = width;
            n.policy_x = fixed_policy(width);
        });
    }

    /// Fix the outer height; same policy rule as [`set_width`](Self::set_width).
    pub fn set_height(&mut self, id: WidgetId, height: i32) {
        let height = height.max(0);
        self.update(id, |n| {
            n.fixed.height = height;
            n.policy_y = fixed_policy(height);
        });
    }

    /// Set the padding. Negative sides clamp to zero.
    pub fn set_padding(&mut self, id: WidgetId, padding: Spacing) {
        self.update(id, |n| n.model.padding = padding.non_negative());
    }

    /// Set the margin. Negative sides clamp to zero.
    pub fn set_margin(&mut self, id: WidgetId, margin: Spacing) {
        self.update(id, |n| n.model.margin = margin.non_negative());
    }

    /// Set both size policies.
    pub fn set_size_policy(&mut self, id: WidgetId, x: SizePolicy, y: SizePolicy) {
        self.update(id, |n| {
            n.policy_x = x;
            n.policy_y = y;
        });
    }

    /// Set the axis children are stacked along.
    pub fn set_layout_mode(&mut self, id: WidgetId, mode: LayoutMode) {
        self.update(id, |n| n.layout = mode);
    }

    /// Set the focus flag of one node.
    pub fn set_focused(&mut self, id: WidgetId, focused: bool) {
        self.update(id, |n| n.focused = focused);
    }

    /// Focus `id` and unfocus every other node.
    pub fn focus(&mut self, id: WidgetId) {
        if !self.contains(id) {
            return;
        }
        for (key, node) in self.nodes.iter_mut() {
            node.focused = key == id;
        }
    }

    /// Whether `id` is focused.
    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.focused)
    }

    // -----------------------------------------------------------------------
    // Absolute geometry
    // -----------------------------------------------------------------------

    /// Absolute inner origin of the parent of `id` (screen origin for the root).
    fn parent_origin(&self, id: WidgetId) -> Offset {
        match self.parent(id) {
            Some(p) => self.inner_real(p).offset(),
            None => Offset::ZERO,
        }
    }

    /// Absolute outer rect of `id` on screen.
    ///
    /// Composed from the ancestor chain on every call.
    pub fn outer_real(&self, id: WidgetId) -> Region {
        match self.nodes.get(id) {
            Some(node) => node.model.outer().translate(self.parent_origin(id)),
            None => Region::EMPTY,
        }
    }

    /// Absolute inner rect of `id` on screen.
    ///
    /// Composed from the ancestor chain on every call.
    pub fn inner_real(&self, id: WidgetId) -> Region {
        match self.nodes.get(id) {
            Some(node) => node.model.inner().translate(self.parent_origin(id)),
            None => Region::EMPTY,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
