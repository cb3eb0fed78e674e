//! Keyboard focus: the tab-order chain and focus transitions.

use tracing::debug;

use super::Gui;
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::state::WidgetState;

// ---------------------------------------------------------------------------
// FocusChain
// ---------------------------------------------------------------------------

/// Ordered list of widgets that can take focus.
///
/// Built from the tree by a depth-first pre-order walk, so the order matches
/// insertion order within each container. Disabled and non-selectable widgets
/// are skipped. Navigation wraps at both ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusChain {
    nodes: Vec<WidgetId>,
}

impl FocusChain {
    /// Collect the focusable widgets under `root`.
    pub fn build(tree: &WidgetTree, root: WidgetId) -> Self {
        let nodes = tree
            .walk_depth_first(root)
            .into_iter()
            .filter(|&id| {
                tree.get(id)
                    .is_some_and(|node| !node.is_container() && node.accepts_focus())
            })
            .collect();
        Self { nodes }
    }

    /// The widget after `current`. Starts at the first one when `current` is
    /// `None` or not in the chain.
    pub fn next_after(&self, current: Option<WidgetId>) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let next = match current.and_then(|id| self.position(id)) {
            Some(idx) => (idx + 1) % self.nodes.len(),
            None => 0,
        };
        self.nodes.get(next).copied()
    }

    /// The widget before `current`. Starts at the last one when `current` is
    /// `None` or not in the chain.
    pub fn previous_before(&self, current: Option<WidgetId>) -> Option<WidgetId> {
        if self.nodes.is_empty() {
            return None;
        }
        let prev = match current.and_then(|id| self.position(id)) {
            Some(0) | None => self.nodes.len() - 1,
            Some(idx) => idx - 1,
        };
        self.nodes.get(prev).copied()
    }

    fn position(&self, id: WidgetId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == id)
    }

    pub fn nodes(&self) -> &[WidgetId] {
        &self.nodes
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Gui focus operations
// ---------------------------------------------------------------------------

impl Gui {
    /// The current tab order of the attached tree.
    pub fn focus_chain(&self) -> FocusChain {
        FocusChain::build(&self.tree, self.root)
    }

    /// Move focus to the next widget in tab order, wrapping around.
    pub fn focus_next(&mut self) -> Option<WidgetId> {
        let next = self.focus_chain().next_after(self.focused)?;
        self.focus_widget(next);
        Some(next)
    }

    /// Move focus to the previous widget in tab order, wrapping around.
    pub fn focus_previous(&mut self) -> Option<WidgetId> {
        let prev = self.focus_chain().previous_before(self.focused)?;
        self.focus_widget(prev);
        Some(prev)
    }

    /// Give keyboard focus to `id`.
    ///
    /// Returns `false` (and changes nothing) if the widget cannot take focus.
    pub fn focus(&mut self, id: WidgetId) -> bool {
        let focusable = self
            .tree
            .get(id)
            .is_some_and(|node| !node.is_container() && node.accepts_focus());
        if focusable {
            self.focus_widget(id);
        }
        focusable
    }

    /// Drop keyboard focus. The former target returns to its resting state.
    pub fn clear_focus(&mut self) {
        let Some(old) = self.focused.take() else {
            return;
        };
        debug!(?old, "focus cleared");
        self.release_focus(old);
    }

    pub(crate) fn focus_widget(&mut self, id: WidgetId) {
        if self.focused == Some(id) {
            return;
        }
        if let Some(old) = self.focused.take() {
            self.release_focus(old);
        }
        debug!(?id, "focus moved");
        self.focused = Some(id);
        self.set_state(id, WidgetState::Focused);
        self.with_widget(id, |w, ctx| w.on_focus_gained(ctx));
    }

    fn release_focus(&mut self, id: WidgetId) {
        if self.capture == Some(id) {
            self.capture = None;
        }
        let Some(node) = self.tree.get(id) else {
            return;
        };
        if node.state.has_focus() {
            let resting = WidgetState::resting(node.hovered);
            self.set_state(id, resting);
        }
        self.with_widget(id, |w, ctx| w.on_focus_lost(ctx));
    }
}
