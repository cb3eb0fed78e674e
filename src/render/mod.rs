//! Rendering seam: the host's drawing backend implements [`Renderer`].
//!
//! The core never draws. `Gui::render` walks the attached tree depth-first
//! and hands every widget to the renderer with its composed transform.

use crate::geometry::{Offset, Region, Size, Transform};
use crate::theme::{Color, Theme};
use crate::tree::WidgetId;
use crate::widget::state::WidgetState;
use crate::widget::traits::Widget;

/// Everything a backend needs to draw one widget.
pub struct DrawItem<'a> {
    pub id: WidgetId,
    /// The widget, for downcasting to concrete types.
    pub widget: &'a dyn Widget,
    /// Local-to-window transform.
    pub transform: Transform,
    pub size: Size,
    pub state: WidgetState,
    pub hovered: bool,
    pub theme: &'a Theme,
    /// Nesting depth below the root container (the root is 0).
    pub depth: usize,
}

impl DrawItem<'_> {
    /// The widget's rectangle in window coordinates.
    pub fn bounds(&self) -> Region {
        let origin = self.transform.apply(Offset::ZERO);
        Region::from_parts(origin, self.size)
    }
}

impl std::fmt::Debug for DrawItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawItem")
            .field("id", &self.id)
            .field("widget", &self.widget.widget_type())
            .field("bounds", &self.bounds())
            .field("state", &self.state)
            .field("hovered", &self.hovered)
            .field("depth", &self.depth)
            .finish()
    }
}

/// A drawing backend.
pub trait Renderer {
    /// Called once before the first widget, with the window background.
    fn begin_frame(&mut self, _background: Color) {}

    /// Draw one widget. Containers come before their children.
    fn draw(&mut self, item: &DrawItem<'_>);

    /// Called once after the last widget.
    fn end_frame(&mut self) {}
}
