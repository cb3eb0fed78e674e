//! ProgressBar widget: a passive percentage display.

use std::any::Any;

use super::Orientation;
use crate::geometry::Size;
use crate::theme::Theme;
use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

/// Where a progress bar shows its "NN%" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelPlacement {
    /// No label.
    None,
    /// Drawn over the bar.
    #[default]
    Over,
    /// Drawn next to the bar, which grows to make room.
    Outside,
}

/// A bar filled to a value in `0..=100`.
///
/// Progress bars never take focus or receive input.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    value: f32,
    length: i32,
    orientation: Orientation,
    placement: LabelPlacement,
    label: String,
}

impl ProgressBar {
    /// A horizontal 200px bar at 0% with the label drawn over it.
    pub fn new() -> Self {
        Self {
            value: 0.0,
            length: 200,
            orientation: Orientation::Horizontal,
            placement: LabelPlacement::Over,
            label: label_for(0.0),
        }
    }

    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length.max(0);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_label_placement(mut self, placement: LabelPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to `0..=100`. Non-finite values count as 0.
    pub fn set_value(&mut self, value: f32) {
        self.value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
        self.label = label_for(self.value);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_placement(&self) -> LabelPlacement {
        self.placement
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Bar size, excluding any outside label.
    pub fn bar_size(&self, theme: &Theme) -> Size {
        let thickness = theme.box_height();
        match self.orientation {
            Orientation::Horizontal => Size::new(self.length, thickness),
            Orientation::Vertical => Size::new(thickness, self.length),
        }
    }

    fn natural_size(&self, theme: &Theme) -> Size {
        let bar = self.bar_size(theme);
        if self.placement != LabelPlacement::Outside {
            return bar;
        }
        let label = theme.measure(&label_for(100.0));
        match self.orientation {
            Orientation::Horizontal => Size::new(
                bar.width + theme.margin + label.width,
                bar.height.max(label.height),
            ),
            Orientation::Vertical => Size::new(
                bar.width.max(label.width),
                bar.height + theme.margin + label.height,
            ),
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

fn label_for(value: f32) -> String {
    format!("{}%", value.round() as i32)
}

impl Widget for ProgressBar {
    fn widget_type(&self) -> &str {
        "ProgressBar"
    }

    fn selectable(&self) -> bool {
        false
    }

    fn caption(&self) -> Option<&str> {
        match self.placement {
            LabelPlacement::None => None,
            LabelPlacement::Over | LabelPlacement::Outside => Some(&self.label),
        }
    }

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
