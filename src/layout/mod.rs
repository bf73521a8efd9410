//! Layout: box model, size policies, and the space distributor.
//!
//! The tree-level driver (hint aggregation, resize, relayout) lives in
//! [`engine`] as methods on [`Tree`](crate::dom::Tree).

pub mod box_model;
pub mod distribute;
pub mod engine;
pub mod policy;

pub use box_model::BoxModel;
pub use distribute::distribute;
pub use policy::{LayoutMode, SizeHints, SizePolicy};
