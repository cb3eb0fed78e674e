//! Widget arena: slotmap-backed ownership tree with sibling links.

pub mod node;
pub mod tree;

pub use node::{WidgetId, WidgetNode};
pub use tree::WidgetTree;
