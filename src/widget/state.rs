//! Per-widget interaction state.

/// Interaction state of a selectable widget.
///
/// Hover is tracked separately on the node, so a `Focused` widget can still
/// report that the pointer is over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetState {
    #[default]
    Default,
    Hovered,
    Focused,
    Pressed,
    Disabled,
}

impl WidgetState {
    /// Whether the widget holds keyboard focus in this state.
    pub fn has_focus(self) -> bool {
        matches!(self, Self::Focused | Self::Pressed)
    }

    /// The state to fall back to when focus or a press ends.
    pub fn resting(hovered: bool) -> Self {
        if hovered {
            Self::Hovered
        } else {
            Self::Default
        }
    }
}
