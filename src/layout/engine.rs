//! TaffyTree wrapper for container geometry.
//!
//! [`LayoutEngine`] turns a container's layout kind and the current sizes of
//! its children into child positions and the container's own size. Every run
//! rebuilds the taffy tree from scratch, so recomputing is idempotent.

use taffy::style_helpers::length;
use taffy::{AlignItems, Display, FlexDirection, Style, TaffyTree};
use taffy::prelude::TaffyMaxContent;

use crate::error::{GuiError, Result};
use crate::geometry::{Offset, Size};

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Top to bottom, left-aligned.
    Vertical,
    /// Left to right, top-aligned.
    Horizontal,
    /// Children taken in (label, content) pairs: a label column sized to the
    /// widest label, then the content column. Rows are vertically centered.
    Form,
}

/// Output of one layout run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arrangement {
    /// One position per child, in child order, relative to the container.
    pub positions: Vec<Offset>,
    /// The container's resulting size.
    pub size: Size,
    /// Width of the label column (forms only, zero otherwise).
    pub label_width: i32,
}

/// Wraps a [`TaffyTree`] reused across runs.
pub struct LayoutEngine {
    tree: TaffyTree<()>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
        }
    }

    /// Arrange `children` (their current sizes, in order) with `spacing`
    /// pixels between consecutive items.
    pub fn arrange(&mut self, kind: LayoutKind, children: &[Size], spacing: i32) -> Result<Arrangement> {
        self.tree.clear();
        let spacing = spacing.max(0);
        match kind {
            LayoutKind::Vertical => self.stack(FlexDirection::Column, children, spacing),
            LayoutKind::Horizontal => self.stack(FlexDirection::Row, children, spacing),
            LayoutKind::Form => self.form(children, spacing),
        }
        .map_err(|e| GuiError::Layout(e.to_string()))
    }

    fn stack(
        &mut self,
        direction: FlexDirection,
        children: &[Size],
        spacing: i32,
    ) -> taffy::TaffyResult<Arrangement> {
        let leaves = children
            .iter()
            .map(|&size| self.tree.new_leaf(leaf_style(size)))
            .collect::<taffy::TaffyResult<Vec<_>>>()?;
        let root = self
            .tree
            .new_with_children(container_style(direction, spacing, AlignItems::Start), &leaves)?;
        self.tree.compute_layout(root, taffy::Size::MAX_CONTENT)?;

        let positions = leaves
            .iter()
            .map(|&leaf| self.location(leaf))
            .collect::<taffy::TaffyResult<Vec<_>>>()?;
        Ok(Arrangement {
            positions,
            size: self.size(root)?,
            label_width: 0,
        })
    }

    fn form(&mut self, children: &[Size], spacing: i32) -> taffy::TaffyResult<Arrangement> {
        let label_width = children
            .iter()
            .step_by(2)
            .map(|s| s.width)
            .max()
            .unwrap_or(0);

        // (row node, [(cell node, child index)])
        let mut rows = Vec::new();
        for (row_index, pair) in children.chunks(2).enumerate() {
            let first = row_index * 2;
            let mut cells = Vec::with_capacity(pair.len());
            match pair {
                [label, content] => {
                    let label_cell = Size::new(label_width, label.height);
                    cells.push((self.tree.new_leaf(leaf_style(label_cell))?, first));
                    cells.push((self.tree.new_leaf(leaf_style(*content))?, first + 1));
                }
                [label] => cells.push((self.tree.new_leaf(leaf_style(*label))?, first)),
                _ => continue,
            }
            let nodes: Vec<_> = cells.iter().map(|(node, _)| *node).collect();
            let row = self.tree.new_with_children(
                container_style(FlexDirection::Row, spacing, AlignItems::Center),
                &nodes,
            )?;
            rows.push((row, cells));
        }

        let row_nodes: Vec<_> = rows.iter().map(|(row, _)| *row).collect();
        let root = self.tree.new_with_children(
            container_style(FlexDirection::Column, spacing, AlignItems::Start),
            &row_nodes,
        )?;
        self.tree.compute_layout(root, taffy::Size::MAX_CONTENT)?;

        let mut positions = vec![Offset::ZERO; children.len()];
        for (row, cells) in &rows {
            let origin = self.location(*row)?;
            for (cell, index) in cells {
                positions[*index] = origin + self.location(*cell)?;
            }
        }
        Ok(Arrangement {
            positions,
            size: self.size(root)?,
            label_width,
        })
    }

    fn location(&self, node: taffy::NodeId) -> taffy::TaffyResult<Offset> {
        let layout = self.tree.layout(node)?;
        Ok(Offset::from((layout.location.x, layout.location.y)))
    }

    fn size(&self, node: taffy::NodeId) -> taffy::TaffyResult<Size> {
        let layout = self.tree.layout(node)?;
        Ok(Size::from((layout.size.width, layout.size.height)))
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn container_style(direction: FlexDirection, spacing: i32, align: AlignItems) -> Style {
    let gap = length(spacing as f32);
    Style {
        display: Display::Flex,
        flex_direction: direction,
        align_items: Some(align),
        gap: taffy::Size { width: gap, height: gap },
        ..Style::default()
    }
}

fn leaf_style(size: Size) -> Style {
    Style {
        size: taffy::Size {
            width: length(size.width.max(0) as f32),
            height: length(size.height.max(0) as f32),
        },
        flex_shrink: 0.0,
        ..Style::default()
    }
}
