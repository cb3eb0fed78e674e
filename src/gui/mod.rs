//! The root controller.
//!
//! A [`Gui`] owns the widget arena, the theme, the name registry and the
//! hovered/focused/captured widgets. The host feeds it input with
//! [`Gui::process`] and draws it with [`Gui::render`].

pub mod command;
pub mod focus;
pub mod geometry;
pub mod registry;
pub mod routing;
pub mod theming;

use tracing::{trace, warn};

pub use command::{Command, CommandSender};
pub use focus::FocusChain;
pub use registry::NameRegistry;

use crate::error::{GuiError, Result};
use crate::event::binding::KeyBindingRegistry;
use crate::geometry::{Offset, Size, Transform};
use crate::layout::{LayoutEngine, LayoutKind};
use crate::render::{DrawItem, Renderer};
use crate::theme::Theme;
use crate::tree::{WidgetId, WidgetNode, WidgetTree};
use crate::widget::callback::Callback;
use crate::widget::context::{Effects, WidgetCtx};
use crate::widget::state::WidgetState;
use crate::widget::traits::Widget;
use crate::widgets::{Container, Label};
use command::CommandQueue;

// ---------------------------------------------------------------------------
// GuiConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`Gui`].
#[derive(Debug, Clone)]
pub struct GuiConfig {
    /// Optional window title, for the host's use.
    pub title: Option<String>,
    /// Position of the root container in the window.
    pub position: Offset,
    /// Layout of the root container.
    pub root_layout: LayoutKind,
    /// Keys consumed by the controller for focus navigation.
    pub bindings: KeyBindingRegistry,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: None,
            position: Offset::ZERO,
            root_layout: LayoutKind::Vertical,
            bindings: KeyBindingRegistry::with_defaults(),
        }
    }
}

impl GuiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the root container position (builder).
    pub fn with_position(mut self, position: impl Into<Offset>) -> Self {
        self.position = position.into();
        self
    }

    /// Set the root container layout (builder).
    pub fn with_root_layout(mut self, layout: LayoutKind) -> Self {
        self.root_layout = layout;
        self
    }

    /// Replace the focus-navigation bindings (builder).
    pub fn with_bindings(mut self, bindings: KeyBindingRegistry) -> Self {
        self.bindings = bindings;
        self
    }
}

// ---------------------------------------------------------------------------
// Gui
// ---------------------------------------------------------------------------

/// Structural work postponed until the current event has been routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingOp {
    Remove(WidgetId),
}

/// The root controller: one widget tree, one theme, one focus.
pub struct Gui {
    config: GuiConfig,
    tree: WidgetTree,
    root: WidgetId,
    theme: Theme,
    layout: LayoutEngine,
    names: NameRegistry,
    hovered: Option<WidgetId>,
    focused: Option<WidgetId>,
    capture: Option<WidgetId>,
    /// Set while `process` runs; removals are queued instead of applied.
    routing: bool,
    pending: Vec<PendingOp>,
    commands: CommandQueue,
    window_size: Size,
    closed: bool,
}

impl Gui {
    /// Create a controller with an empty root container.
    pub fn new(config: GuiConfig, theme: Theme) -> Self {
        let mut tree = WidgetTree::new();
        let mut root_node = WidgetNode::new(Box::new(Container::new(config.root_layout)));
        root_node.set_position(config.position);
        let root = tree.insert(root_node);
        Self {
            config,
            tree,
            root,
            theme,
            layout: LayoutEngine::new(),
            names: NameRegistry::new(),
            hovered: None,
            focused: None,
            capture: None,
            routing: false,
            pending: Vec::new(),
            commands: CommandQueue::new(),
            window_size: Size::ZERO,
            closed: false,
        }
    }

    /// The root container.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Read-only view of the arena.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Move `widget` into the arena as a detached root.
    ///
    /// The widget sizes itself from the current theme before this returns.
    pub fn create<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.create_boxed(Box::new(widget))
    }

    /// Like [`create`](Self::create), for an already boxed widget.
    pub fn create_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = self.tree.insert(WidgetNode::new(widget));
        trace!(?id, "widget created");
        self.with_widget(id, |w, ctx| w.on_theme_changed(ctx));
        if self.tree.get(id).is_some_and(WidgetNode::is_container) {
            self.relayout(id);
        }
        id
    }

    /// Append a new widget to `container`.
    pub fn add<W: Widget>(&mut self, container: WidgetId, widget: W) -> Result<WidgetId> {
        self.ensure_container(container)?;
        let id = self.create(widget);
        if let Err(err) = self.attach(container, id) {
            self.tree.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Append a new widget and register it under `name`.
    ///
    /// The container must be part of the attached tree; otherwise nothing is
    /// inserted and `Detached` is returned. A taken name fails before
    /// insertion too.
    pub fn add_named<W: Widget>(
        &mut self,
        container: WidgetId,
        name: impl Into<String>,
        widget: W,
    ) -> Result<WidgetId> {
        let name = name.into();
        self.ensure_container(container)?;
        if self.tree.root_of(container) != self.root {
            warn!(?container, %name, "named insert into a detached container");
            return Err(GuiError::Detached(container));
        }
        if self.names.contains(&name) {
            warn!(%name, "duplicate widget name");
            return Err(GuiError::DuplicateName(name));
        }
        let id = self.add(container, widget)?;
        self.names.register(name, id)?;
        Ok(id)
    }

    /// Append a labelled row to a form container. Returns the content widget.
    pub fn add_row<W: Widget>(
        &mut self,
        form: WidgetId,
        label: impl Into<String>,
        content: W,
    ) -> Result<WidgetId> {
        self.ensure_form(form)?;
        let label = self.create(Label::new(label));
        let content = self.create(content);
        self.attach_row(form, label, content)?;
        Ok(content)
    }

    /// Append two existing detached widgets as one form row.
    pub fn attach_row(&mut self, form: WidgetId, label: WidgetId, content: WidgetId) -> Result<()> {
        self.ensure_form(form)?;
        for id in [label, content] {
            let node = self.tree.get(id).ok_or(GuiError::WidgetNotFound(id))?;
            if node.links.parent.is_some() {
                return Err(GuiError::AlreadyAttached(id));
            }
        }
        if label == content {
            return Err(GuiError::AlreadyAttached(content));
        }
        self.tree.append_child(form, label)?;
        if let Err(err) = self.tree.append_child(form, content) {
            self.tree.detach(label);
            return Err(err);
        }
        self.recompute_geometry(form)
    }

    /// Attach a detached widget (and its subtree) to the end of `container`.
    pub fn attach(&mut self, container: WidgetId, child: WidgetId) -> Result<()> {
        self.ensure_container(container)?;
        if let Err(err) = self.tree.append_child(container, child) {
            warn!(?container, ?child, %err, "attach rejected");
            return Err(err);
        }
        trace!(?container, ?child, "widget attached");
        self.recompute_geometry(container)
    }

    /// Destroy a widget and its whole subtree.
    ///
    /// While an event is being routed the removal is queued and applied once
    /// routing finishes.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        if id == self.root {
            warn!("attempt to remove the root container");
            return Err(GuiError::RootRemoval);
        }
        if !self.tree.contains(id) {
            return Err(GuiError::WidgetNotFound(id));
        }
        if self.routing {
            trace!(?id, "removal deferred until routing ends");
            self.pending.push(PendingOp::Remove(id));
            return Ok(());
        }
        self.remove_now(id);
        Ok(())
    }

    fn remove_now(&mut self, id: WidgetId) {
        let parent = self.tree.parent(id);
        let removed = self.tree.remove(id);
        if removed.is_empty() {
            return;
        }
        trace!(?id, count = removed.len(), "subtree removed");
        self.names.purge(&removed);
        for slot in [&mut self.hovered, &mut self.focused, &mut self.capture] {
            if slot.is_some_and(|w| removed.contains(&w)) {
                *slot = None;
            }
        }
        if let Some(parent) = parent {
            self.relayout_upward(parent);
        }
    }

    pub(crate) fn flush_pending(&mut self) {
        for op in std::mem::take(&mut self.pending) {
            match op {
                PendingOp::Remove(id) => self.remove_now(id),
            }
        }
    }

    // ── Callbacks and typed access ───────────────────────────────────

    /// Install the widget's callback, replacing any previous one.
    pub fn set_callback(&mut self, id: WidgetId, callback: Callback) -> Result<()> {
        let node = self.tree.get_mut(id).ok_or(GuiError::WidgetNotFound(id))?;
        node.callback = Some(callback);
        Ok(())
    }

    /// Remove and return the widget's callback.
    pub fn take_callback(&mut self, id: WidgetId) -> Option<Callback> {
        self.tree.get_mut(id)?.callback.take()
    }

    /// Run the widget's callback now, as if it had been activated.
    pub fn trigger_callback(&mut self, id: WidgetId) {
        self.fire_callback(id);
    }

    /// Mutate a widget of concrete type `W` with a live context.
    ///
    /// Resizes and callbacks requested through the context are applied after
    /// `f` returns, exactly as for input hooks.
    pub fn update<W: Widget, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut W, &mut WidgetCtx<'_>) -> R,
    ) -> Result<R> {
        let wrong_type = GuiError::WrongType {
            id,
            expected: std::any::type_name::<W>(),
        };
        let node = self.tree.get(id).ok_or(GuiError::WidgetNotFound(id))?;
        if !node.widget.is::<W>() {
            return Err(wrong_type);
        }
        self.with_widget(id, |w, ctx| w.downcast_mut::<W>().map(|w| f(w, ctx)))
            .flatten()
            .ok_or(wrong_type)
    }

    /// Shared access to a widget of concrete type `W`.
    pub fn widget<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.tree.get(id)?.widget.downcast_ref::<W>()
    }

    /// Shared access to any widget.
    pub fn widget_dyn(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.tree.get(id).map(WidgetNode::widget)
    }

    // ── Names ────────────────────────────────────────────────────────

    /// Register a name for an existing widget. The first registration wins.
    pub fn register_name(&mut self, name: impl Into<String>, id: WidgetId) -> Result<()> {
        if !self.tree.contains(id) {
            return Err(GuiError::WidgetNotFound(id));
        }
        self.names.register(name, id)
    }

    /// The widget registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<WidgetId> {
        self.names.lookup(name)
    }

    /// The widget registered under `name`, if it is a `W`.
    pub fn find<W: Widget>(&self, name: &str) -> Option<&W> {
        self.widget::<W>(self.lookup(name)?)
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    // ── State ────────────────────────────────────────────────────────

    pub fn state_of(&self, id: WidgetId) -> Option<WidgetState> {
        self.tree.get(id).map(|n| n.state)
    }

    pub fn is_hovered(&self, id: WidgetId) -> bool {
        self.tree.get(id).is_some_and(|n| n.hovered)
    }

    /// The widget under the pointer.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    /// The widget with keyboard focus.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// The widget holding the pointer between press and release.
    pub fn captured(&self) -> Option<WidgetId> {
        self.capture
    }

    /// Enable or disable a widget. Disabled widgets get no events and are
    /// skipped by focus cycling.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> Result<()> {
        let node = self.tree.get(id).ok_or(GuiError::WidgetNotFound(id))?;
        let disabled = node.state == WidgetState::Disabled;
        if enabled == !disabled {
            return Ok(());
        }
        if enabled {
            self.set_state(id, WidgetState::Default);
        } else {
            self.drop_interaction(id);
            self.set_state(id, WidgetState::Disabled);
        }
        Ok(())
    }

    /// Make a widget (non-)interactive. A non-selectable widget stays in
    /// `Default` and is transparent to the pointer.
    pub fn set_selectable(&mut self, id: WidgetId, selectable: bool) -> Result<()> {
        let node = self.tree.get_mut(id).ok_or(GuiError::WidgetNotFound(id))?;
        node.selectable = selectable;
        if !selectable {
            self.drop_interaction(id);
            if self.state_of(id) != Some(WidgetState::Disabled) {
                self.set_state(id, WidgetState::Default);
            }
        }
        Ok(())
    }

    /// Release hover, capture and focus held by `id`.
    fn drop_interaction(&mut self, id: WidgetId) {
        if self.focused == Some(id) {
            self.clear_focus();
        }
        if self.capture == Some(id) {
            self.capture = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
            if let Some(node) = self.tree.get_mut(id) {
                node.hovered = false;
            }
            self.with_widget(id, |w, ctx| w.on_mouse_leave(ctx));
        }
    }

    // ── Host integration ─────────────────────────────────────────────

    /// Draw the attached tree depth-first: containers before their children,
    /// children in insertion order.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.begin_frame(self.theme.window_background);
        let mut stack = vec![(self.root, Transform::IDENTITY, 0usize)];
        while let Some((id, parent_transform, depth)) = stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            let transform = parent_transform.then(node.transform);
            renderer.draw(&DrawItem {
                id,
                widget: node.widget(),
                transform,
                size: node.size,
                state: node.state,
                hovered: node.hovered,
                theme: &self.theme,
                depth,
            });
            stack.extend(
                self.tree
                    .children_rev(id)
                    .map(|child| (child, transform, depth + 1)),
            );
        }
        renderer.end_frame();
    }

    /// A handle other threads can use to queue mutations.
    pub fn command_sender(&self) -> CommandSender {
        self.commands.sender()
    }

    /// Run every queued command. Returns how many ran.
    pub fn drain_commands(&mut self) -> usize {
        let mut count = 0;
        while let Some(command) = self.commands.try_next() {
            command(self);
            count += 1;
        }
        if count > 0 {
            trace!(count, "commands drained");
        }
        count
    }

    /// Whether the host window asked to close.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Last size reported by the host window.
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Run a hook on one widget, then apply what it asked for: the resize
    /// first, then the callback.
    pub(crate) fn with_widget<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut dyn Widget, &mut WidgetCtx<'_>) -> R,
    ) -> Option<R> {
        let node = self.tree.get_mut(id)?;
        let mut ctx = WidgetCtx::new(&self.theme, node.size, node.state).with_hover(node.hovered);
        let out = f(node.widget.as_mut(), &mut ctx);
        let effects = ctx.into_effects();
        self.apply_effects(id, effects);
        Some(out)
    }

    fn apply_effects(&mut self, id: WidgetId, effects: Effects) {
        if let Some(size) = effects.resize {
            if let Err(err) = self.set_size(id, size) {
                warn!(?id, %err, "resize requested by widget failed");
            }
        }
        if effects.fire {
            self.fire_callback(id);
        }
    }

    /// Run the widget's callback with full access to the `Gui`.
    ///
    /// The callback is taken out of its node while it runs and put back
    /// afterwards unless it replaced itself or removed its widget.
    fn fire_callback(&mut self, id: WidgetId) {
        let Some(mut callback) = self.tree.get_mut(id).and_then(|n| n.callback.take()) else {
            return;
        };
        trace!(?id, "callback fired");
        callback.call(self, id);
        if let Some(node) = self.tree.get_mut(id) {
            if node.callback.is_none() {
                node.callback = Some(callback);
            }
        }
    }

    /// Change the interaction state, notifying the widget.
    pub(crate) fn set_state(&mut self, id: WidgetId, state: WidgetState) {
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        if node.state == state {
            return;
        }
        trace!(?id, from = ?node.state, to = ?state, "state changed");
        node.state = state;
        self.with_widget(id, |w, ctx| w.on_state_changed(ctx, state));
    }

    fn ensure_container(&self, id: WidgetId) -> Result<LayoutKind> {
        let node = self.tree.get(id).ok_or(GuiError::WidgetNotFound(id))?;
        node.widget.layout().ok_or(GuiError::NotAContainer(id))
    }

    fn ensure_form(&self, id: WidgetId) -> Result<()> {
        match self.ensure_container(id) {
            Ok(LayoutKind::Form) => Ok(()),
            Ok(_) | Err(GuiError::NotAContainer(_)) => Err(GuiError::NotAForm(id)),
            Err(err) => Err(err),
        }
    }
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("root", &self.root)
            .field("widgets", &self.tree.len())
            .field("hovered", &self.hovered)
            .field("focused", &self.focused)
            .field("capture", &self.capture)
            .field("closed", &self.closed)
            .finish()
    }
}
