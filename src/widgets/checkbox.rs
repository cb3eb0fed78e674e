//! CheckBox widget: a toggled boolean.

use std::any::Any;

use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

/// A square box that flips between checked and unchecked on each click.
///
/// Every toggle fires the callback; read the new value with
/// [`is_checked`](CheckBox::is_checked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckBox {
    checked: bool,
}

impl CheckBox {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the value without firing the callback.
    pub fn check(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

impl Widget for CheckBox {
    fn widget_type(&self) -> &str {
        "CheckBox"
    }

    fn on_click(&mut self, ctx: &mut WidgetCtx<'_>) {
        self.toggle();
        ctx.fire_callback();
    }

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        let theme = ctx.theme();
        let side = theme.line_height() + 2 * (theme.padding + theme.border_size);
        ctx.set_size((side, side));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
