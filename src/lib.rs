//! # cellbox
//!
//! A small retained-mode terminal widget toolkit built on
//! [crossterm](https://crates.io/crates/crossterm).
//!
//! Widgets live in an arena-backed tree. Every node carries a box model
//! (margin, border, padding) and a pair of size policies; a container splits
//! its inner space among its children with a five-phase distributor, then
//! the tree is drawn top-down onto a cell surface and shown in one frame.
//! Widgets may ask for a repaint from any thread through a bounded queue.
//!
//! ## Core Systems
//!
//! - **[`geometry`]**: Offset, Size, Region, Spacing, Borders primitives
//! - **[`layout`]**: Box model, size policies, space distribution, hints and resize
//! - **[`dom`]**: Slotmap-backed widget tree with box setters and drawing
//! - **[`widget`]**: Widget trait, draw/event contexts, builder extension
//! - **[`widgets`]**: Built-in widgets: Container, Label, Input
//! - **[`event`]**: Input events, key identifiers, key bindings, routing
//! - **[`render`]**: Cells, surfaces, painter, repaint queue, crossterm driver
//! - **[`app`]**: Application struct tying everything together
//! - **[`testing`]**: Headless pilot and snapshot helpers

// Foundation
pub mod error;
pub mod geometry;
pub mod text;
pub mod theme;

// Core systems
pub mod dom;
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod app;
pub mod testing;

pub use app::{App, AppConfig};
pub use dom::{Tree, WidgetId};
pub use error::{Error, Result};
pub use event::Event;
pub use theme::Theme;
pub use widget::{Widget, WidgetExt};
