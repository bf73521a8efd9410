//! Built-in widgets: Container, Label, Input.

pub mod container;
pub mod input;
pub mod label;

pub use container::Container;
pub use input::{EchoMode, Input, InputCallback};
pub use label::Label;
