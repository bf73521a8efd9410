//! Event system: identifiers, input conversion, key bindings, dispatch.

pub mod binding;
mod dispatch;
pub mod input;
pub mod keys;

pub use binding::{BindingHandler, KeyBindingRegistry};
pub use input::{Event, MouseEvent};
