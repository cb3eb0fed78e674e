//! Widget trait: identity, layout role and interaction hooks.
//!
//! The `Widget` trait is the contract between a concrete control and the
//! `Gui`. The core owns geometry and interaction state; a widget only reacts
//! to hooks, mutates its own data and records follow-up work on the
//! [`WidgetCtx`]. Every hook has a no-op default.

use std::any::Any;

use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::geometry::{Offset, Size};
use crate::layout::LayoutKind;
use crate::widget::context::WidgetCtx;
use crate::widget::state::WidgetState;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every control.
///
/// Widget is object-safe: the `Gui` stores `Box<dyn Widget>` and recovers the
/// concrete type through [`as_any`](Widget::as_any) when asked for it.
/// Pointer positions handed to hooks are widget-local.
pub trait Widget: Any {
    /// The type name used in diagnostics and render outlines (e.g. "Button").
    fn widget_type(&self) -> &str;

    /// The layout algorithm, for widgets that arrange children.
    fn layout(&self) -> Option<LayoutKind> {
        None
    }

    /// Whether new nodes of this widget take part in interaction.
    ///
    /// Defaults to `true`. Passive widgets (labels, images, containers)
    /// override it.
    fn selectable(&self) -> bool {
        true
    }

    /// Text the widget displays, if any. Used by renderers and outlines.
    fn caption(&self) -> Option<&str> {
        None
    }

    /// Whether `key` activates the focused widget (a synthetic click).
    ///
    /// Defaults to Space and Enter without Ctrl or Alt.
    fn is_activation_key(&self, key: &KeyEvent) -> bool {
        let chord = key.modifiers.contains(Modifiers::CTRL) || key.modifiers.contains(Modifiers::ALT);
        !chord && matches!(key.code, Key::Enter | Key::Char(' '))
    }

    /// The widget was clicked or activated. Fires the callback by default.
    fn on_click(&mut self, ctx: &mut WidgetCtx<'_>) {
        ctx.fire_callback();
    }

    /// Interaction state changed. Restyle here.
    fn on_state_changed(&mut self, _ctx: &mut WidgetCtx<'_>, _state: WidgetState) {}

    /// The widget joined a `Gui`, or the theme was replaced.
    ///
    /// Widgets size themselves from theme metrics here.
    fn on_theme_changed(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    /// The node's size changed.
    fn on_resized(&mut self, _size: Size) {}

    fn on_mouse_enter(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn on_mouse_leave(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn on_mouse_moved(&mut self, _ctx: &mut WidgetCtx<'_>, _pos: Offset) {}

    fn on_mouse_pressed(&mut self, _ctx: &mut WidgetCtx<'_>, _pos: Offset) {}

    fn on_mouse_released(&mut self, _ctx: &mut WidgetCtx<'_>, _pos: Offset) {}

    /// Wheel turned over the widget. Positive deltas scroll up.
    fn on_mouse_wheel(&mut self, _ctx: &mut WidgetCtx<'_>, _delta: i32) {}

    fn on_key_pressed(&mut self, _ctx: &mut WidgetCtx<'_>, _key: &KeyEvent) {}

    fn on_key_released(&mut self, _ctx: &mut WidgetCtx<'_>, _key: &KeyEvent) {}

    fn on_text_entered(&mut self, _ctx: &mut WidgetCtx<'_>, _ch: char) {}

    fn on_focus_gained(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn on_focus_lost(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<'a> dyn Widget + 'a {
    /// The concrete widget, if it is a `W`.
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.as_any().downcast_ref::<W>()
    }

    /// The concrete widget, mutably, if it is a `W`.
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.as_any_mut().downcast_mut::<W>()
    }

    /// Whether the widget is a `W`.
    pub fn is<W: Widget>(&self) -> bool {
        self.as_any().is::<W>()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
