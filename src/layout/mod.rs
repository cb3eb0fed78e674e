//! Layout: stack and form arrangement computed with taffy.

pub mod engine;

pub use engine::{Arrangement, LayoutEngine, LayoutKind};
