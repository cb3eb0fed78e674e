//! Container widget: arranges its children with a layout algorithm.
//!
//! A container draws nothing and never takes part in interaction; the `Gui`
//! positions its children and sizes it whenever they change.

use std::any::Any;

use crate::layout::LayoutKind;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A layout node holding child widgets.
///
/// # Examples
///
/// ```
/// use sfw_core::gui::{Gui, GuiConfig};
/// use sfw_core::theme::Theme;
/// use sfw_core::widgets::{Button, Container};
///
/// let mut gui = Gui::new(GuiConfig::default(), Theme::default());
/// let row = gui.add(gui.root(), Container::horizontal()).unwrap();
/// gui.add(row, Button::new("Yes")).unwrap();
/// gui.add(row, Button::new("No")).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    kind: LayoutKind,
}

impl Container {
    /// Create a container with the given layout.
    pub fn new(kind: LayoutKind) -> Self {
        Self { kind }
    }

    /// Children stacked top to bottom.
    pub fn vertical() -> Self {
        Self::new(LayoutKind::Vertical)
    }

    /// Children stacked left to right.
    pub fn horizontal() -> Self {
        Self::new(LayoutKind::Horizontal)
    }

    /// Label/content rows; fill it with `Gui::add_row`.
    pub fn form() -> Self {
        Self::new(LayoutKind::Form)
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::vertical()
    }
}

impl Widget for Container {
    fn widget_type(&self) -> &str {
        match self.kind {
            LayoutKind::Vertical => "VBox",
            LayoutKind::Horizontal => "HBox",
            LayoutKind::Form => "Form",
        }
    }

    fn layout(&self) -> Option<LayoutKind> {
        Some(self.kind)
    }

    fn selectable(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
