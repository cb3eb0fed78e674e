//! Headless testing tools: Pilot, a recording renderer and in-memory assets.
//!
//! Use the [`Pilot`] to drive a [`Gui`](crate::gui::Gui) with simulated input
//! and [`RecordingRenderer`] to capture what it would draw as a plain-text
//! outline for snapshot-style assertions.

pub mod pilot;
pub mod recorder;

pub use pilot::Pilot;
pub use recorder::{RecordedItem, RecordingRenderer, StubAssets};
