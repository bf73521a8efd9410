//! Widget tree: slotmap arena, node settings, drawing.

mod draw;
pub mod node;
pub mod tree;

pub use node::{Node, WidgetId};
pub use tree::Tree;
