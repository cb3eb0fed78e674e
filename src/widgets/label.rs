//! Label widget: a line of static text.

use std::any::Any;

use crate::geometry::Size;
use crate::theme::Theme;
use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

/// Non-interactive text.
///
/// Labels are transparent to the pointer and skipped by focus cycling. Their
/// natural size is the text extent plus the theme padding on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    text_size: Option<u32>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_size: None,
        }
    }

    /// Use a fixed character size instead of the theme's (builder pattern).
    pub fn with_text_size(mut self, size: u32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character size override, if any.
    pub fn text_size(&self) -> Option<u32> {
        self.text_size
    }

    /// Replace the text and resize to fit it.
    pub fn set_text(&mut self, ctx: &mut WidgetCtx<'_>, text: impl Into<String>) {
        self.text = text.into();
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    /// Change the character size and resize to fit.
    pub fn set_text_size(&mut self, ctx: &mut WidgetCtx<'_>, size: u32) {
        self.text_size = Some(size);
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    fn natural_size(&self, theme: &Theme) -> Size {
        let size = self.text_size.unwrap_or(theme.text_size);
        theme.font.measure(&self.text, size).pad(theme.padding)
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn selectable(&self) -> bool {
        false
    }

    fn caption(&self) -> Option<&str> {
        Some(&self.text)
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
