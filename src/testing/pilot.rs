//! Pilot: programmatic interaction with a headless Gui.
//!
//! The `Pilot` wraps a [`Gui`] and provides methods to simulate user input
//! (pointer moves and clicks, key presses, typing, window events), drain the
//! command queue and capture the render outline for snapshot testing.

use crate::event::input::{InputEvent, Key, KeyEvent, Modifiers, MouseButton};
use crate::geometry::{Offset, Size};
use crate::gui::{Gui, GuiConfig};
use crate::theme::Theme;
use crate::tree::WidgetId;

use super::recorder::RecordingRenderer;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless Gui driver for testing.
///
/// # Examples
///
/// ```
/// use sfw_core::testing::Pilot;
/// use sfw_core::widgets::TextBox;
///
/// let mut pilot = Pilot::new();
/// let root = pilot.gui().root();
/// let name = pilot.gui_mut().add(root, TextBox::new()).unwrap();
/// pilot.tab();
/// pilot.type_text("Ada");
/// assert_eq!(pilot.gui().widget::<TextBox>(name).unwrap().text(), "Ada");
/// ```
pub struct Pilot {
    gui: Gui,
}

impl Pilot {
    /// A Gui with the default config and builtin theme.
    pub fn new() -> Self {
        Self::with_config(GuiConfig::default())
    }

    pub fn with_config(config: GuiConfig) -> Self {
        Self {
            gui: Gui::new(config, Theme::default()),
        }
    }

    /// Replace the theme (builder pattern).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.gui.apply_theme(theme);
        self
    }

    // ── Pointer ──────────────────────────────────────────────────────

    pub fn hover(&mut self, x: i32, y: i32) {
        self.gui.process(InputEvent::moved(x, y));
    }

    /// Left-button press at a window point.
    pub fn press(&mut self, x: i32, y: i32) {
        self.hover(x, y);
        self.gui.process(InputEvent::pressed(x, y));
    }

    /// Left-button release at a window point.
    pub fn release(&mut self, x: i32, y: i32) {
        self.gui.process(InputEvent::released(x, y));
    }

    /// Move, press and release at the same point.
    pub fn click(&mut self, x: i32, y: i32) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Click the centre of a widget. Returns `false` if it does not exist.
    pub fn click_widget(&mut self, id: WidgetId) -> bool {
        let Some(center) = self.center_of(id) else {
            return false;
        };
        self.click(center.x, center.y);
        true
    }

    /// Press at one point and release at another, moving in between.
    pub fn drag(&mut self, from: (i32, i32), to: (i32, i32)) {
        self.press(from.0, from.1);
        self.hover(to.0, to.1);
        self.release(to.0, to.1);
    }

    pub fn wheel(&mut self, x: i32, y: i32, delta: i32) {
        self.gui.process(InputEvent::MouseWheel {
            position: Offset::new(x, y),
            delta,
        });
    }

    pub fn right_click(&mut self, x: i32, y: i32) {
        let position = Offset::new(x, y);
        let button = MouseButton::Right;
        self.gui.process(InputEvent::MousePressed { position, button });
        self.gui.process(InputEvent::MouseReleased { position, button });
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// Press and release a key with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.press_key_with(key, Modifiers::NONE);
    }

    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        let event = KeyEvent::new(key, modifiers);
        self.gui.process(InputEvent::KeyPressed(event));
        self.gui.process(InputEvent::KeyReleased(event));
    }

    /// Type each character of `text` as a key press followed by text entry,
    /// the way a keyboard produces it.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let event = KeyEvent::plain(Key::Char(ch));
            self.gui.process(InputEvent::KeyPressed(event));
            self.gui.process(InputEvent::TextEntered(ch));
            self.gui.process(InputEvent::KeyReleased(event));
        }
    }

    pub fn tab(&mut self) {
        self.press_key(Key::Tab);
    }

    pub fn shift_tab(&mut self) {
        self.press_key_with(Key::Tab, Modifiers::SHIFT);
    }

    // ── Window ───────────────────────────────────────────────────────

    pub fn resize(&mut self, width: i32, height: i32) {
        self.gui.process(InputEvent::Resized { width, height });
    }

    pub fn close(&mut self) {
        self.gui.process(InputEvent::Closed);
    }

    /// Simulate one frame: run queued commands. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        self.gui.drain_commands()
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut Gui {
        &mut self.gui
    }

    /// Whether the window is still open.
    pub fn is_running(&self) -> bool {
        !self.gui.is_closed()
    }

    /// Window coordinates of a widget's centre.
    pub fn center_of(&self, id: WidgetId) -> Option<Offset> {
        let origin = self.gui.absolute_position(id)?;
        let Size { width, height } = self.gui.size_of(id)?;
        Some(Offset::new(origin.x + width / 2, origin.y + height / 2))
    }

    /// Render the attached tree and return its outline.
    pub fn outline(&self) -> String {
        let mut recorder = RecordingRenderer::new();
        self.gui.render(&mut recorder);
        recorder.outline()
    }
}

impl Default for Pilot {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
