//! Widget system: the trait, draw and event contexts, builder settings.

pub mod traits;

pub use traits::{DrawContext, EventContext, NodeSetup, Widget, WidgetBuilder, WidgetExt};
