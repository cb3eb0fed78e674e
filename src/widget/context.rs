//! Context lent to widget hooks.

use crate::geometry::{Offset, Size};
use crate::theme::Theme;
use crate::widget::state::WidgetState;

/// What a widget sees of the `Gui` while one of its hooks runs.
///
/// Hooks cannot reach the tree directly. Instead they read the theme and
/// their own geometry here, and record follow-up work (a resize, a callback)
/// that the `Gui` applies once the hook returns: the resize first, then the
/// callback.
#[derive(Debug)]
pub struct WidgetCtx<'a> {
    theme: &'a Theme,
    size: Size,
    state: WidgetState,
    hovered: bool,
    resize: Option<Size>,
    fire: bool,
}

/// Deferred work recorded by a hook.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Effects {
    pub resize: Option<Size>,
    pub fire: bool,
}

impl<'a> WidgetCtx<'a> {
    /// A context for a widget of `size` in `state`.
    ///
    /// The `Gui` builds these itself; the constructor is public so widgets can
    /// be exercised on their own.
    pub fn new(theme: &'a Theme, size: Size, state: WidgetState) -> Self {
        Self {
            theme,
            size,
            state,
            hovered: false,
            resize: None,
            fire: false,
        }
    }

    pub(crate) fn with_hover(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// The widget's current size, including a resize requested earlier in
    /// the same hook.
    pub fn size(&self) -> Size {
        self.resize.unwrap_or(self.size)
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a widget-local point lies inside the widget.
    pub fn contains(&self, point: Offset) -> bool {
        self.size().contains(point)
    }

    /// Ask for a new size. The container re-lays-out after the hook.
    pub fn set_size(&mut self, size: impl Into<Size>) {
        let size = size.into();
        self.resize = (size != self.size).then_some(size);
    }

    /// Ask for the widget's callback to run after the hook.
    pub fn fire_callback(&mut self) {
        self.fire = true;
    }

    /// The size requested during this hook, if it differs from the current one.
    pub fn requested_size(&self) -> Option<Size> {
        self.resize
    }

    /// Whether the hook asked for the callback.
    pub fn callback_requested(&self) -> bool {
        self.fire
    }

    pub(crate) fn into_effects(self) -> Effects {
        Effects {
            resize: self.resize,
            fire: self.fire,
        }
    }
}
