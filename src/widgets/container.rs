//! Container widget: a bordered box that stacks its children.
//!
//! A container draws nothing of its own. Its frame and title are drawn by the
//! tree; its children are laid out along its [`LayoutMode`].

use std::any::Any;

use crate::geometry::Borders;
use crate::layout::LayoutMode;
use crate::widget::traits::{NodeSetup, Widget};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A box holding child widgets side by side or on top of each other.
///
/// # Examples
///
/// ```ignore
/// use cellbox::dom::Tree;
/// use cellbox::widgets::{Container, Label};
///
/// let mut tree = Tree::new(Container::vertical());
/// let row = tree.append(tree.root(), Container::horizontal()).unwrap();
/// tree.append(row, Label::new("left"));
/// tree.append(row, Label::new("right"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    layout: LayoutMode,
}

impl Container {
    /// A container stacking children along `layout`.
    pub fn new(layout: LayoutMode) -> Self {
        Self { layout }
    }

    /// Children left to right.
    pub fn horizontal() -> Self {
        Self::new(LayoutMode::Horizontal)
    }

    /// Children top to bottom.
    pub fn vertical() -> Self {
        Self::new(LayoutMode::Vertical)
    }

    /// The stacking axis.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::vertical()
    }
}

impl Widget for Container {
    fn widget_type(&self) -> &str {
        "Box"
    }

    fn setup(&self) -> NodeSetup {
        NodeSetup { layout: self.layout, border: Borders::ALL, ..NodeSetup::default() }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
