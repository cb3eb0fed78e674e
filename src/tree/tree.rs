//! Tree operations: insert, attach, detach, remove, walk.

use slotmap::SlotMap;

use super::node::{WidgetId, WidgetNode};
use crate::error::{GuiError, Result};

/// The widget arena.
///
/// Every widget lives in one `SlotMap`. A node either hangs under a container
/// (its `parent` link is set) or is a root of its own detached subtree. Stale
/// handles are detected by the slotmap's generation counter, so removed ids
/// never alias a newer widget.
pub struct WidgetTree {
    pub(crate) nodes: SlotMap<WidgetId, WidgetNode>,
}

impl WidgetTree {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Insert a node as a detached root.
    pub fn insert(&mut self, node: WidgetNode) -> WidgetId {
        self.nodes.insert(node)
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// Rejects a child that already has a container and a parent that lies
    /// inside the child's own subtree.
    pub fn append_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        if !self.nodes.contains_key(parent) {
            return Err(GuiError::WidgetNotFound(parent));
        }
        let Some(child_node) = self.nodes.get(child) else {
            return Err(GuiError::WidgetNotFound(child));
        };
        if child_node.links.parent.is_some() {
            return Err(GuiError::AlreadyAttached(child));
        }
        if parent == child || self.ancestors(parent).contains(&child) {
            return Err(GuiError::CyclicAttach { parent, child });
        }

        let old_last = self.nodes[parent].links.last_child;
        {
            let links = &mut self.nodes[child].links;
            links.parent = Some(parent);
            links.prev = old_last;
            links.next = None;
        }
        match old_last {
            Some(last) => self.nodes[last].links.next = Some(child),
            None => self.nodes[parent].links.first_child = Some(child),
        }
        self.nodes[parent].links.last_child = Some(child);
        Ok(())
    }

    /// Unlink a node from its container, keeping its subtree intact.
    ///
    /// Returns the former container, if any.
    pub fn detach(&mut self, id: WidgetId) -> Option<WidgetId> {
        let links = self.nodes.get(id)?.links;
        let parent = links.parent?;

        match links.prev {
            Some(prev) => self.nodes[prev].links.next = links.next,
            None => self.nodes[parent].links.first_child = links.next,
        }
        match links.next {
            Some(next) => self.nodes[next].links.prev = links.prev,
            None => self.nodes[parent].links.last_child = links.prev,
        }

        let own = &mut self.nodes[id].links;
        own.parent = None;
        own.prev = None;
        own.next = None;
        Some(parent)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed ids in pre-order (the node itself first), or an
    /// empty vec if the node did not exist.
    pub fn remove(&mut self, id: WidgetId) -> Vec<WidgetId> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }
        self.detach(id);
        let doomed = self.walk_depth_first(id);
        for &node in &doomed {
            let removed = self.nodes.remove(node);
            debug_assert!(removed.is_some(), "subtree walk yielded a dangling id");
        }
        doomed
    }

    /// The container of a node, if it has one.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.links.parent)
    }

    /// A node is a root when it has no container.
    pub fn is_root(&self, id: WidgetId) -> bool {
        self.parent(id).is_none()
    }

    /// The sibling inserted right after `id`.
    pub fn next_sibling(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.links.next)
    }

    /// The sibling inserted right before `id`.
    pub fn prev_sibling(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.links.prev)
    }

    /// Children in insertion order.
    pub fn children(&self, id: WidgetId) -> Children<'_> {
        Children {
            tree: self,
            cursor: self.nodes.get(id).and_then(|n| n.links.first_child),
            forward: true,
        }
    }

    /// Children from the most recently inserted to the oldest.
    pub fn children_rev(&self, id: WidgetId) -> Children<'_> {
        Children {
            tree: self,
            cursor: self.nodes.get(id).and_then(|n| n.links.last_child),
            forward: false,
        }
    }

    /// Number of direct children.
    pub fn child_count(&self, id: WidgetId) -> usize {
        self.children(id).count()
    }

    /// Ancestors from the immediate container up to the root (exclusive of `id`).
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent(current) {
            result.push(p);
            current = p;
        }
        result
    }

    /// The root of the subtree containing `id`.
    pub fn root_of(&self, id: WidgetId) -> WidgetId {
        let mut current = id;
        while let Some(p) = self.parent(current) {
            current = p;
        }
        current
    }

    /// Pre-order depth-first traversal starting from `start`.
    ///
    /// This is the order used for focus cycling and for drawing.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push in reverse so the first child is visited first.
            stack.extend(self.children_rev(current));
        }
        result
    }

    /// Post-order traversal (children before their container).
    pub fn walk_post_order(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = self.walk_depth_first_mirrored(start);
        result.reverse();
        result
    }

    /// Pre-order traversal visiting the newest child first.
    fn walk_depth_first_mirrored(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current));
        }
        result
    }

    /// All roots in the arena (the attached tree plus detached subtrees).
    pub fn roots(&self) -> Vec<WidgetId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.links.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Immutable access to a node.
    pub fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    /// Mutable access to a node.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    /// Whether the arena holds `id`.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a container's children, following sibling links.
pub struct Children<'a> {
    tree: &'a WidgetTree,
    cursor: Option<WidgetId>,
    forward: bool,
}

impl Iterator for Children<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<WidgetId> {
        let current = self.cursor?;
        let links = self.tree.nodes.get(current)?.links;
        self.cursor = if self.forward { links.next } else { links.prev };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Button, Container, Label};

    fn panel() -> WidgetNode {
        WidgetNode::new(Box::new(Container::vertical()))
    }

    fn leaf(text: &str) -> WidgetNode {
        WidgetNode::new(Box::new(Label::new(text)))
    }

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (WidgetTree, [WidgetId; 5]) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(panel());
        let a = tree.insert(panel());
        let b = tree.insert(leaf("b"));
        let c = tree.insert(leaf("c"));
        let d = tree.insert(WidgetNode::new(Box::new(Button::new("d"))));
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();
        tree.append_child(a, c).unwrap();
        tree.append_child(a, d).unwrap();
        (tree, [root, a, b, c, d])
    }

    #[test]
    fn parent_and_root_relationships() {
        let (tree, [root, a, _b, c, _d]) = build_tree();
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(c), Some(a));
        assert!(tree.is_root(root));
        assert!(!tree.is_root(c));
        assert_eq!(tree.root_of(c), root);
    }

    #[test]
    fn sibling_links() {
        let (tree, [root, a, b, c, d]) = build_tree();
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.prev_sibling(b), Some(a));
        assert_eq!(tree.prev_sibling(a), None);
        assert_eq!(tree.next_sibling(d), None);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(tree.children_rev(a).collect::<Vec<_>>(), vec![d, c]);
        assert_eq!(tree.child_count(a), 2);
        let _ = c;
    }

    #[test]
    fn ancestors() {
        let (tree, [root, a, _b, c, _d]) = build_tree();
        assert_eq!(tree.ancestors(c), vec![a, root]);
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn append_rejects_attached_child() {
        let (mut tree, [_root, a, b, c, _d]) = build_tree();
        let err = tree.append_child(b, c).unwrap_err();
        assert!(matches!(err, GuiError::AlreadyAttached(id) if id == c));
        assert_eq!(tree.parent(c), Some(a));
    }

    #[test]
    fn append_rejects_cycles() {
        let mut tree = WidgetTree::new();
        let outer = tree.insert(panel());
        let inner = tree.insert(panel());
        tree.append_child(outer, inner).unwrap();
        let err = tree.append_child(inner, outer).unwrap_err();
        assert!(matches!(err, GuiError::CyclicAttach { .. }));
        let err = tree.append_child(outer, outer).unwrap_err();
        assert!(matches!(err, GuiError::CyclicAttach { .. }));
    }

    #[test]
    fn detach_middle_child_relinks_siblings() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(panel());
        let ids: Vec<_> = (0..3).map(|i| tree.insert(leaf(&i.to_string()))).collect();
        for &id in &ids {
            tree.append_child(root, id).unwrap();
        }
        assert_eq!(tree.detach(ids[1]), Some(root));
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![ids[0], ids[2]]);
        assert_eq!(tree.next_sibling(ids[0]), Some(ids[2]));
        assert_eq!(tree.prev_sibling(ids[2]), Some(ids[0]));
        assert!(tree.is_root(ids[1]));
        // Detached nodes can be attached again.
        tree.append_child(root, ids[1]).unwrap();
        assert_eq!(tree.children(root).last(), Some(ids[1]));
    }

    #[test]
    fn remove_subtree() {
        let (mut tree, [root, a, b, c, d]) = build_tree();
        let removed = tree.remove(a);
        assert_eq!(removed, vec![a, c, d]);
        assert!(!tree.contains(c));
        assert!(!tree.contains(d));
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![b]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_last_child_updates_tail() {
        let (mut tree, [root, a, b, ..]) = build_tree();
        tree.remove(b);
        assert_eq!(tree.children_rev(root).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn remove_stale_id() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(leaf("x"));
        tree.remove(id);
        assert!(tree.remove(id).is_empty());
    }

    #[test]
    fn walks() {
        let (tree, [root, a, b, c, d]) = build_tree();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.walk_depth_first(a), vec![a, c, d]);
        assert_eq!(tree.walk_post_order(root), vec![c, d, a, b, root]);
    }

    #[test]
    fn roots_lists_detached_subtrees() {
        let (mut tree, [root, ..]) = build_tree();
        let loose = tree.insert(leaf("loose"));
        let roots = tree.roots();
        assert_eq!(roots.len(), 2);
        assert!(roots.contains(&root));
        assert!(roots.contains(&loose));
    }
}
