//! Input routing and the interaction state machine.

use tracing::{debug, trace};

use super::Gui;
use crate::event::binding::BindingAction;
use crate::event::input::{InputEvent, KeyEvent, MouseButton};
use crate::geometry::{Offset, Size};
use crate::tree::WidgetId;
use crate::widget::state::WidgetState;

impl Gui {
    /// Route one host event through the tree.
    ///
    /// Everything the event triggers (hooks, resizes, callbacks, deferred
    /// removals) has finished when this returns.
    pub fn process(&mut self, event: InputEvent) {
        trace!(?event, "routing event");
        self.routing = true;
        match event {
            InputEvent::MouseMoved { position } => self.route_mouse_moved(position),
            InputEvent::MousePressed { position, button: MouseButton::Left } => {
                self.route_mouse_pressed(position)
            }
            InputEvent::MouseReleased { position, button: MouseButton::Left } => {
                self.route_mouse_released(position)
            }
            InputEvent::MousePressed { .. } | InputEvent::MouseReleased { .. } => {}
            InputEvent::MouseWheel { position, delta } => self.route_mouse_wheel(position, delta),
            InputEvent::KeyPressed(key) => self.route_key_pressed(key),
            InputEvent::KeyReleased(key) => {
                if let Some(id) = self.focused {
                    self.with_widget(id, |w, ctx| w.on_key_released(ctx, &key));
                }
            }
            InputEvent::TextEntered(ch) => {
                if let Some(id) = self.focused {
                    self.with_widget(id, |w, ctx| w.on_text_entered(ctx, ch));
                }
            }
            InputEvent::Resized { width, height } => {
                self.window_size = Size::new(width, height);
            }
            InputEvent::Closed => {
                debug!("window closed");
                self.closed = true;
            }
        }
        self.routing = false;
        self.flush_pending();
    }

    fn route_mouse_moved(&mut self, position: Offset) {
        if let Some(id) = self.capture {
            let Some(local) = self.to_local(id, position) else {
                self.capture = None;
                return;
            };
            let inside = self.size_of(id).is_some_and(|s| s.contains(local));
            if inside != self.is_hovered(id) {
                if inside {
                    self.enter(id);
                } else {
                    self.leave(id);
                }
            }
            self.with_widget(id, |w, ctx| w.on_mouse_moved(ctx, local));
            return;
        }

        if let Some(id) = self.refresh_hover(position) {
            if let Some(local) = self.to_local(id, position) {
                self.with_widget(id, |w, ctx| w.on_mouse_moved(ctx, local));
            }
        }
    }

    fn route_mouse_pressed(&mut self, position: Offset) {
        let Some(id) = self.refresh_hover(position) else {
            // Press on empty space.
            self.clear_focus();
            return;
        };
        trace!(?id, "press");
        self.focus_widget(id);
        self.set_state(id, WidgetState::Pressed);
        self.capture = Some(id);
        if let Some(local) = self.to_local(id, position) {
            self.with_widget(id, |w, ctx| w.on_mouse_pressed(ctx, local));
        }
    }

    fn route_mouse_released(&mut self, position: Offset) {
        let target = self.capture.take().filter(|&id| self.tree.contains(id));
        if let Some(id) = target {
            let local = self.to_local(id, position).unwrap_or(position);
            let inside = self.size_of(id).is_some_and(|s| s.contains(local));
            self.with_widget(id, |w, ctx| w.on_mouse_released(ctx, local));

            // A focus move or a disable during the press ends it without a click.
            let pressed = self.state_of(id) == Some(WidgetState::Pressed)
                && self.focused == Some(id);
            if !pressed {
                trace!(?id, "press already ended");
            } else if inside {
                trace!(?id, "click");
                self.set_state(id, WidgetState::Focused);
                self.with_widget(id, |w, ctx| w.on_click(ctx));
            } else {
                trace!(?id, "release outside");
                if self.focused == Some(id) {
                    self.clear_focus();
                }
                self.set_state(id, WidgetState::Default);
            }
        }
        self.refresh_hover(position);
    }

    fn route_mouse_wheel(&mut self, position: Offset, delta: i32) {
        if let Some(id) = self.refresh_hover(position) {
            self.with_widget(id, |w, ctx| w.on_mouse_wheel(ctx, delta));
        }
    }

    fn route_key_pressed(&mut self, key: KeyEvent) {
        if let Some(action) = self.config.bindings.resolve(&key) {
            trace!(?action, "navigation key");
            match action {
                BindingAction::FocusNext => {
                    self.focus_next();
                }
                BindingAction::FocusPrevious => {
                    self.focus_previous();
                }
                BindingAction::ClearFocus => self.clear_focus(),
            }
            return;
        }

        let Some(id) = self.focused else {
            return;
        };
        let activates = self
            .tree
            .get(id)
            .is_some_and(|node| node.widget.is_activation_key(&key));
        let pressed = self.state_of(id) == Some(WidgetState::Pressed);
        if activates && pressed {
            // The pointer release will click it.
            trace!(?id, "activation key while pressed");
        } else if activates {
            // Synthetic press and release.
            self.set_state(id, WidgetState::Pressed);
            self.set_state(id, WidgetState::Focused);
            self.with_widget(id, |w, ctx| w.on_click(ctx));
        } else {
            self.with_widget(id, |w, ctx| w.on_key_pressed(ctx, &key));
        }
    }

    /// Re-run the hit test and emit leave/enter for a changed hover target.
    fn refresh_hover(&mut self, position: Offset) -> Option<WidgetId> {
        let target = self.hit_test(position);
        if target != self.hovered {
            if let Some(old) = self.hovered {
                self.leave(old);
            }
            if let Some(new) = target {
                self.enter(new);
            }
        }
        target
    }

    fn enter(&mut self, id: WidgetId) {
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        node.hovered = true;
        self.hovered = Some(id);
        if node.state == WidgetState::Default {
            self.set_state(id, WidgetState::Hovered);
        }
        self.with_widget(id, |w, ctx| w.on_mouse_enter(ctx));
    }

    fn leave(&mut self, id: WidgetId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        node.hovered = false;
        if node.state == WidgetState::Hovered {
            self.set_state(id, WidgetState::Default);
        }
        self.with_widget(id, |w, ctx| w.on_mouse_leave(ctx));
    }
}
