//! Geometry: sizes, positions, container layout and hit-testing.

use tracing::{trace, warn};

use super::Gui;
use crate::error::{GuiError, Result};
use crate::geometry::{Offset, Size, Transform};
use crate::tree::WidgetId;

impl Gui {
    /// Resize a widget and re-lay-out every container above it.
    ///
    /// A container's size always comes from its layout, so for a container
    /// the requested size is ignored and its layout is re-run instead.
    pub fn set_size(&mut self, id: WidgetId, size: impl Into<Size>) -> Result<()> {
        let size = size.into();
        let node = self.tree.get_mut(id).ok_or(GuiError::WidgetNotFound(id))?;
        if node.is_container() {
            trace!(?id, ?size, "container size comes from layout");
            return self.recompute_geometry(id);
        }
        node.size = size;
        node.widget.on_resized(size);
        match self.tree.parent(id) {
            Some(parent) => self.recompute_geometry(parent),
            None => Ok(()),
        }
    }

    /// Move a widget within its container.
    ///
    /// Children of containers are placed by their container's layout, so
    /// this is mostly useful for the root and for detached widgets.
    pub fn set_position(&mut self, id: WidgetId, position: impl Into<Offset>) -> Result<()> {
        let node = self.tree.get_mut(id).ok_or(GuiError::WidgetNotFound(id))?;
        node.set_position(position.into());
        Ok(())
    }

    /// Re-run the layout of `container`, then of each container above it.
    pub fn recompute_geometry(&mut self, container: WidgetId) -> Result<()> {
        let mut current = container;
        loop {
            self.arrange(current)?;
            match self.tree.parent(current) {
                Some(parent) => current = parent,
                None => return Ok(()),
            }
        }
    }

    /// Lay out one container from its children's current sizes.
    pub(crate) fn arrange(&mut self, container: WidgetId) -> Result<()> {
        let kind = self.ensure_container(container)?;
        let children: Vec<WidgetId> = self.tree.children(container).collect();
        let sizes: Vec<Size> = children
            .iter()
            .filter_map(|&child| self.tree.get(child).map(|n| n.size))
            .collect();
        let arrangement = self.layout.arrange(kind, &sizes, self.theme.margin)?;

        for (&child, &position) in children.iter().zip(&arrangement.positions) {
            if let Some(node) = self.tree.get_mut(child) {
                node.set_position(position);
            }
        }
        let node = self.tree.get_mut(container).ok_or(GuiError::WidgetNotFound(container))?;
        if node.size != arrangement.size {
            trace!(?container, size = ?arrangement.size, "container resized");
            node.size = arrangement.size;
            node.widget.on_resized(arrangement.size);
        }
        Ok(())
    }

    /// Lay out one container, logging instead of returning failures.
    pub(crate) fn relayout(&mut self, container: WidgetId) {
        if let Err(err) = self.arrange(container) {
            warn!(?container, %err, "layout failed");
        }
    }

    /// Like [`recompute_geometry`](Self::recompute_geometry), logging failures.
    pub(crate) fn relayout_upward(&mut self, container: WidgetId) {
        if let Err(err) = self.recompute_geometry(container) {
            warn!(?container, %err, "layout failed");
        }
    }

    pub fn size_of(&self, id: WidgetId) -> Option<Size> {
        self.tree.get(id).map(|n| n.size)
    }

    /// Position relative to the widget's container.
    pub fn position_of(&self, id: WidgetId) -> Option<Offset> {
        self.tree.get(id).map(|n| n.position)
    }

    /// Composed local-to-window transform.
    pub fn transform_of(&self, id: WidgetId) -> Option<Transform> {
        let mut transform = self.tree.get(id)?.transform;
        for ancestor in self.tree.ancestors(id) {
            transform = self.tree.get(ancestor)?.transform.then(transform);
        }
        Some(transform)
    }

    /// Window position of the widget's top-left corner.
    pub fn absolute_position(&self, id: WidgetId) -> Option<Offset> {
        self.transform_of(id).map(|t| t.apply(Offset::ZERO))
    }

    /// Convert a window point to the widget's local coordinates.
    pub fn to_local(&self, id: WidgetId, point: Offset) -> Option<Offset> {
        self.transform_of(id).map(|t| t.invert(point))
    }

    /// The interactive widget under a window point.
    ///
    /// Later siblings are tested first, so the most recently inserted widget
    /// wins where siblings overlap. Containers, passive and disabled widgets
    /// are transparent.
    pub fn hit_test(&self, point: Offset) -> Option<WidgetId> {
        self.hit(self.root, point)
    }

    fn hit(&self, id: WidgetId, parent_point: Offset) -> Option<WidgetId> {
        let node = self.tree.get(id)?;
        let local = node.transform.invert(parent_point);
        if !node.size.contains(local) {
            return None;
        }
        if node.is_container() {
            return self
                .tree
                .children_rev(id)
                .find_map(|child| self.hit(child, local));
        }
        node.accepts_focus().then_some(id)
    }
}
