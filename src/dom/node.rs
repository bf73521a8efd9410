//! Node types: WidgetId, Node.

use std::fmt;

use slotmap::new_key_type;

use crate::geometry::Size;
use crate::layout::{BoxModel, LayoutMode, SizePolicy};
use crate::widget::Widget;

new_key_type! {
    /// Unique identifier for a widget in a [`Tree`](super::Tree). Copy, lightweight (u64).
    pub struct WidgetId;
}

/// One widget plus the layout state the tree keeps for it.
pub struct Node {
    pub(crate) widget: Box<dyn Widget>,
    /// Geometry relative to the parent's inner origin, plus framing.
    pub model: BoxModel,
    /// Axis along which children are stacked.
    pub layout: LayoutMode,
    pub policy_x: SizePolicy,
    pub policy_y: SizePolicy,
    /// Fixed outer size per axis; 0 means not fixed.
    pub fixed: Size,
    pub focused: bool,
}

impl Node {
    /// Build a node from the widget's requested setup.
    pub(crate) fn new(widget: Box<dyn Widget>) -> Self {
        let setup = widget.setup();
        let mut model = BoxModel::new(setup.border);
        model.margin = setup.margin.non_negative();
        model.padding = setup.padding.non_negative();
        model.title = setup.title;
        Self {
            widget,
            model,
            layout: setup.layout,
            policy_x: setup.policy_x,
            policy_y: setup.policy_y,
            fixed: Size::new(setup.width.max(0), setup.height.max(0)),
            focused: setup.focused,
        }
    }

    /// The widget.
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    /// Policy along `mode`.
    pub fn policy_along(&self, mode: LayoutMode) -> SizePolicy {
        match mode {
            LayoutMode::Horizontal => self.policy_x,
            LayoutMode::Vertical => self.policy_y,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("widget", &self.widget.widget_type())
            .field("model", &self.model)
            .field("layout", &self.layout)
            .field("policy_x", &self.policy_x)
            .field("policy_y", &self.policy_y)
            .field("fixed", &self.fixed)
            .field("focused", &self.focused)
            .finish()
    }
}
