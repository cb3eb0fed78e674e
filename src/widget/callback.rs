//! Activation callbacks.

use std::fmt;

use crate::gui::Gui;
use crate::tree::WidgetId;

/// The single action attached to a widget.
///
/// Callbacks run after the widget's own hook has returned, so the `Widget`
/// form gets unrestricted access to the whole `Gui`, including the widget
/// that fired it.
pub enum Callback {
    /// A plain action with no arguments.
    Nullary(Box<dyn FnMut()>),
    /// An action receiving the controller and the firing widget.
    Widget(Box<dyn FnMut(&mut Gui, WidgetId)>),
}

impl Callback {
    pub fn nullary(f: impl FnMut() + 'static) -> Self {
        Self::Nullary(Box::new(f))
    }

    pub fn widget(f: impl FnMut(&mut Gui, WidgetId) + 'static) -> Self {
        Self::Widget(Box::new(f))
    }

    pub(crate) fn call(&mut self, gui: &mut Gui, id: WidgetId) {
        match self {
            Self::Nullary(f) => f(),
            Self::Widget(f) => f(gui, id),
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullary(_) => write!(f, "Nullary(<fn>)"),
            Self::Widget(_) => write!(f, "Widget(<fn>)"),
        }
    }
}
