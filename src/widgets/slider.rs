//! Slider widget: picks a value in `0..=100` along one axis.

use std::any::Any;

use super::Orientation;
use crate::event::input::{Key, KeyEvent};
use crate::geometry::{Offset, Size};
use crate::widget::context::WidgetCtx;
use crate::widget::state::WidgetState;
use crate::widget::traits::Widget;

pub const MAX_VALUE: i32 = 100;

/// A value track with a draggable handle.
///
/// The value always stays a multiple of the step within `0..=100`. Pressing
/// or dragging moves the handle to the pointer; arrow keys and the wheel move
/// it by one step. The callback fires on every change of value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    value: i32,
    step: i32,
    length: i32,
    orientation: Orientation,
}

impl Slider {
    /// A horizontal slider with step 10 and a 200px track.
    pub fn new() -> Self {
        Self {
            value: 0,
            step: 10,
            length: 200,
            orientation: Orientation::Horizontal,
        }
    }

    /// Set the step (builder pattern). Clamped to `1..=100`.
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.clamp(1, MAX_VALUE);
        self.value = self.snap(self.value);
        self
    }

    /// Set the track length in pixels (builder pattern).
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length.max(0);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initial value (builder pattern).
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = self.snap(value);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the value, snapped to the step. Fires the callback if it changed.
    pub fn set_value(&mut self, ctx: &mut WidgetCtx<'_>, value: i32) -> bool {
        let value = self.snap(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        ctx.fire_callback();
        true
    }

    fn snap(&self, value: i32) -> i32 {
        let value = value.clamp(0, MAX_VALUE);
        let snapped = (value + self.step / 2) / self.step * self.step;
        snapped.min(MAX_VALUE)
    }

    /// Value under a widget-local point.
    ///
    /// Vertical sliders grow upwards.
    fn value_at(&self, size: Size, pos: Offset) -> i32 {
        let (along, extent) = match self.orientation {
            Orientation::Horizontal => (pos.x, size.width),
            Orientation::Vertical => (size.height - pos.y, size.height),
        };
        if extent <= 0 {
            return 0;
        }
        along.clamp(0, extent) * MAX_VALUE / extent
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Slider {
    fn widget_type(&self) -> &str {
        "Slider"
    }

    fn is_activation_key(&self, _key: &KeyEvent) -> bool {
        false
    }

    fn on_click(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        let thickness = ctx.theme().box_height();
        match self.orientation {
            Orientation::Horizontal => ctx.set_size((self.length, thickness)),
            Orientation::Vertical => ctx.set_size((thickness, self.length)),
        }
    }

    fn on_mouse_pressed(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        let value = self.value_at(ctx.size(), pos);
        self.set_value(ctx, value);
    }

    fn on_mouse_moved(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        if ctx.state() == WidgetState::Pressed {
            let value = self.value_at(ctx.size(), pos);
            self.set_value(ctx, value);
        }
    }

    fn on_mouse_wheel(&mut self, ctx: &mut WidgetCtx<'_>, delta: i32) {
        let value = self.value + delta.signum() * self.step;
        self.set_value(ctx, value);
    }

    fn on_key_pressed(&mut self, ctx: &mut WidgetCtx<'_>, key: &KeyEvent) {
        let towards_max = match (self.orientation, key.code) {
            (Orientation::Horizontal, Key::Right) | (Orientation::Vertical, Key::Up) => true,
            (Orientation::Horizontal, Key::Left) | (Orientation::Vertical, Key::Down) => false,
            _ => return,
        };
        let delta = if towards_max { self.step } else { -self.step };
        self.set_value(ctx, self.value + delta);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
