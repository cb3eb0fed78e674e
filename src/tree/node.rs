//! Node types: WidgetId, WidgetNode, sibling links.

use slotmap::new_key_type;

use crate::geometry::{Offset, Size, Transform};
use crate::widget::callback::Callback;
use crate::widget::state::WidgetState;
use crate::widget::traits::Widget;

new_key_type! {
    /// Stable handle to a widget in the arena. Copy, lightweight (u64).
    pub struct WidgetId;
}

/// Non-owning links to the surrounding nodes.
///
/// Children are kept as a doubly linked list threaded through the siblings, so
/// both directions of traversal and unlinking are O(1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Links {
    pub parent: Option<WidgetId>,
    pub prev: Option<WidgetId>,
    pub next: Option<WidgetId>,
    pub first_child: Option<WidgetId>,
    pub last_child: Option<WidgetId>,
}

/// One widget in the arena: its behaviour plus the state the core owns.
pub struct WidgetNode {
    /// The widget's own behaviour and data.
    pub(crate) widget: Box<dyn Widget>,
    /// Position relative to the container, in whole pixels.
    pub(crate) position: Offset,
    /// Size in whole pixels.
    pub(crate) size: Size,
    /// Local-to-parent transform, derived from `position`.
    pub(crate) transform: Transform,
    pub(crate) state: WidgetState,
    /// Whether the pointer is over the widget (tracked separately so a
    /// focused widget can still style its hover).
    pub(crate) hovered: bool,
    pub(crate) selectable: bool,
    pub(crate) callback: Option<Callback>,
    pub(crate) links: Links,
}

impl WidgetNode {
    /// Wrap a widget in a fresh, detached node.
    pub fn new(widget: Box<dyn Widget>) -> Self {
        let selectable = widget.selectable();
        Self {
            widget,
            position: Offset::ZERO,
            size: Size::ZERO,
            transform: Transform::IDENTITY,
            state: WidgetState::Default,
            hovered: false,
            selectable,
            callback: None,
            links: Links::default(),
        }
    }

    /// Move the node and refresh its cached transform.
    pub(crate) fn set_position(&mut self, position: Offset) {
        self.position = position;
        self.transform = Transform::translation(position);
    }

    /// The widget behaviour.
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    /// Position relative to the container.
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Local-to-parent transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current interaction state.
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Whether the pointer currently hovers the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the widget takes part in pointer and keyboard interaction.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Whether the widget can become the focus target right now.
    pub fn accepts_focus(&self) -> bool {
        self.selectable && self.state != WidgetState::Disabled
    }

    /// Whether the node arranges children.
    pub fn is_container(&self) -> bool {
        self.widget.layout().is_some()
    }

    /// Structural links.
    pub fn links(&self) -> Links {
        self.links
    }
}

impl std::fmt::Debug for WidgetNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetNode")
            .field("widget", &self.widget.widget_type())
            .field("position", &self.position)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("selectable", &self.selectable)
            .field("links", &self.links)
            .finish()
    }
}
