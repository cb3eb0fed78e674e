//! Button widget: a framed, clickable caption.
//!
//! Clicking or activating a focused button (Enter or Space) fires its
//! callback once.

use std::any::Any;

use crate::geometry::Size;
use crate::theme::Theme;
use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A push button with a one-line caption.
///
/// # Examples
///
/// ```
/// use sfw_core::gui::{Gui, GuiConfig};
/// use sfw_core::theme::Theme;
/// use sfw_core::widget::callback::Callback;
/// use sfw_core::widgets::Button;
///
/// let mut gui = Gui::new(GuiConfig::default(), Theme::default());
/// let quit = gui.add(gui.root(), Button::new("Quit")).unwrap();
/// gui.set_callback(quit, Callback::widget(|gui, id| gui.remove(id).unwrap())).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the caption and resize to fit it.
    pub fn set_text(&mut self, ctx: &mut WidgetCtx<'_>, text: impl Into<String>) {
        self.text = text.into();
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    fn natural_size(&self, theme: &Theme) -> Size {
        let frame = theme.padding + theme.border_size;
        Size::new(theme.measure(&self.text).width + 2 * frame, theme.box_height())
    }
}

impl Widget for Button {
    fn widget_type(&self) -> &str {
        "Button"
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

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::state::WidgetState;

    #[test]
    fn natural_size_frames_the_caption() {
        let theme = Theme::default();
        let mut button = Button::new("OK");
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Default);
        button.on_theme_changed(&mut ctx);
        assert_eq!(ctx.requested_size(), Some(Size::new(16, 16)));
    }

    #[test]
    fn set_text_resizes() {
        let theme = Theme::default();
        let mut button = Button::new("OK");
        let mut ctx = WidgetCtx::new(&theme, Size::new(16, 16), WidgetState::Focused);
        button.set_text(&mut ctx, "Cancel");
        assert_eq!(button.text(), "Cancel");
        assert_eq!(ctx.requested_size(), Some(Size::new(40, 16)));
    }

    #[test]
    fn click_fires_callback() {
        let theme = Theme::default();
        let mut button = Button::new("OK");
        let mut ctx = WidgetCtx::new(&theme, Size::new(16, 16), WidgetState::Focused);
        button.on_click(&mut ctx);
        assert!(ctx.callback_requested());
    }
}
