//! Theme switching and the style sweep.

use tracing::debug;

use super::Gui;
use crate::error::Result;
use crate::theme::{AssetLoader, Theme, ThemeConfig};
use crate::tree::WidgetId;
use crate::widget::context::WidgetCtx;

impl Gui {
    /// Build a theme from `config` and make it current.
    ///
    /// Assets are loaded before anything changes: on failure the error is
    /// returned and the active theme stays in place.
    pub fn set_theme(&mut self, config: &ThemeConfig, loader: &dyn AssetLoader) -> Result<()> {
        let theme = Theme::load(config, loader)?;
        self.apply_theme(theme);
        Ok(())
    }

    /// Replace the theme and restyle every widget.
    ///
    /// Each widget, attached or detached, gets `on_theme_changed` exactly
    /// once. Containers are then re-laid-out bottom-up so size changes made
    /// during the sweep settle in one pass. Callbacks requested during the
    /// sweep run last.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let roots = self.sweep_roots();
        debug!(roots = roots.len(), widgets = self.tree.len(), "applying theme");

        let mut fire = Vec::new();
        for &root in &roots {
            for id in self.tree.walk_depth_first(root) {
                let Some(node) = self.tree.get_mut(id) else {
                    continue;
                };
                let mut ctx = WidgetCtx::new(&self.theme, node.size, node.state).with_hover(node.hovered);
                node.widget.on_theme_changed(&mut ctx);
                let effects = ctx.into_effects();
                if let Some(size) = effects.resize {
                    node.size = size;
                    node.widget.on_resized(size);
                }
                if effects.fire {
                    fire.push(id);
                }
            }
        }

        for &root in &roots {
            for id in self.tree.walk_post_order(root) {
                if self.tree.get(id).is_some_and(|n| n.is_container()) {
                    self.relayout(id);
                }
            }
        }

        for id in fire {
            self.fire_callback(id);
        }
    }

    /// The attached root first, then detached subtrees.
    fn sweep_roots(&self) -> Vec<WidgetId> {
        let mut roots = vec![self.root];
        roots.extend(self.tree.roots().into_iter().filter(|&r| r != self.root));
        roots
    }
}
