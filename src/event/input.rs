//! Input event types delivered by the host window.
//!
//! Defines [`InputEvent`], [`KeyEvent`] and supporting types. Positions are
//! window-local pixels. Crossterm events are adapted with [`translate`], so the
//! rest of the toolkit never depends on crossterm directly.

use std::ops::{BitAnd, BitOr};

use crate::geometry::Offset;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from the windowing backend.
///
/// The space bar is `Char(' ')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event without modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

impl From<Key> for KeyEvent {
    fn from(code: Key) -> Self {
        Self::plain(code)
    }
}

// ---------------------------------------------------------------------------
// MouseButton
// ---------------------------------------------------------------------------

/// Mouse button. Only `Left` drives the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// One event from the host window, in window-local pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    MouseMoved { position: Offset },
    MousePressed { position: Offset, button: MouseButton },
    MouseReleased { position: Offset, button: MouseButton },
    /// Positive deltas scroll up.
    MouseWheel { position: Offset, delta: i32 },
    KeyPressed(KeyEvent),
    KeyReleased(KeyEvent),
    TextEntered(char),
    Resized { width: i32, height: i32 },
    Closed,
}

impl InputEvent {
    /// Pointer move to `(x, y)`.
    pub fn moved(x: i32, y: i32) -> Self {
        Self::MouseMoved { position: Offset::new(x, y) }
    }

    /// Left-button press at `(x, y)`.
    pub fn pressed(x: i32, y: i32) -> Self {
        Self::MousePressed { position: Offset::new(x, y), button: MouseButton::Left }
    }

    /// Left-button release at `(x, y)`.
    pub fn released(x: i32, y: i32) -> Self {
        Self::MouseReleased { position: Offset::new(x, y), button: MouseButton::Left }
    }

    /// Key press without modifiers.
    pub fn key(code: Key) -> Self {
        Self::KeyPressed(KeyEvent::plain(code))
    }

    /// The pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Offset> {
        match self {
            Self::MouseMoved { position }
            | Self::MousePressed { position, .. }
            | Self::MouseReleased { position, .. }
            | Self::MouseWheel { position, .. } => Some(*position),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// crossterm adapter
// ---------------------------------------------------------------------------

/// Convert crossterm key modifiers to our `Modifiers`.
fn convert_modifiers(m: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.contains(crossterm::event::KeyModifiers::SHIFT) {
        out = out | Modifiers::SHIFT;
    }
    if m.contains(crossterm::event::KeyModifiers::CONTROL) {
        out = out | Modifiers::CTRL;
    }
    if m.contains(crossterm::event::KeyModifiers::ALT) {
        out = out | Modifiers::ALT;
    }
    out
}

/// Map a crossterm key code. Returns `None` for keys the toolkit ignores.
fn convert_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;

    let key = match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

/// Convert a crossterm mouse button to our `MouseButton`.
fn convert_mouse_button(b: crossterm::event::MouseButton) -> MouseButton {
    match b {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

/// Translate one crossterm event into zero or more toolkit events.
///
/// A printable key press yields both `KeyPressed` and `TextEntered`, the way a
/// desktop window reports them. Pastes become one `TextEntered` per char.
/// Terminal cells are used as pixels.
pub fn translate(event: crossterm::event::Event) -> Vec<InputEvent> {
    use crossterm::event::{Event, KeyEventKind, MouseEventKind};

    match event {
        Event::Key(ke) => {
            let Some(code) = convert_key(ke.code) else {
                return Vec::new();
            };
            let key = KeyEvent::new(code, convert_modifiers(ke.modifiers));
            match ke.kind {
                KeyEventKind::Release => vec![InputEvent::KeyReleased(key)],
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    let mut out = vec![InputEvent::KeyPressed(key)];
                    if let Key::Char(c) = code {
                        let chord = key.modifiers.contains(Modifiers::CTRL)
                            || key.modifiers.contains(Modifiers::ALT);
                        if !chord {
                            out.push(InputEvent::TextEntered(c));
                        }
                    }
                    out
                }
            }
        }
        Event::Mouse(me) => {
            let position = Offset::new(i32::from(me.column), i32::from(me.row));
            let translated = match me.kind {
                MouseEventKind::Down(b) => InputEvent::MousePressed {
                    position,
                    button: convert_mouse_button(b),
                },
                MouseEventKind::Up(b) => InputEvent::MouseReleased {
                    position,
                    button: convert_mouse_button(b),
                },
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    InputEvent::MouseMoved { position }
                }
                MouseEventKind::ScrollUp => InputEvent::MouseWheel { position, delta: 1 },
                MouseEventKind::ScrollDown => InputEvent::MouseWheel { position, delta: -1 },
                _ => return Vec::new(),
            };
            vec![translated]
        }
        Event::Resize(w, h) => vec![InputEvent::Resized {
            width: i32::from(w),
            height: i32::from(h),
        }],
        Event::Paste(text) => text.chars().map(InputEvent::TextEntered).collect(),
        Event::FocusGained | Event::FocusLost => Vec::new(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ct_key(
        code: crossterm::event::KeyCode,
        modifiers: crossterm::event::KeyModifiers,
    ) -> crossterm::event::Event {
        crossterm::event::Event::Key(crossterm::event::KeyEvent::new(code, modifiers))
    }

    fn ct_mouse(kind: crossterm::event::MouseEventKind) -> crossterm::event::Event {
        crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        })
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(Modifiers::CTRL.contains(Modifiers::NONE));
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods & Modifiers::CTRL, Modifiers::CTRL);
    }

    // ── Constructors ─────────────────────────────────────────────────

    #[test]
    fn event_helpers() {
        assert_eq!(
            InputEvent::pressed(3, 4),
            InputEvent::MousePressed { position: Offset::new(3, 4), button: MouseButton::Left }
        );
        assert_eq!(InputEvent::moved(1, 2).position(), Some(Offset::new(1, 2)));
        assert_eq!(InputEvent::key(Key::Tab).position(), None);
        assert_eq!(KeyEvent::from(Key::Enter), KeyEvent::new(Key::Enter, Modifiers::NONE));
    }

    // ── translate: keys ──────────────────────────────────────────────

    #[test]
    fn printable_key_also_enters_text() {
        let events = translate(ct_key(
            crossterm::event::KeyCode::Char('x'),
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(
            events,
            vec![InputEvent::key(Key::Char('x')), InputEvent::TextEntered('x')]
        );
    }

    #[test]
    fn shifted_char_still_enters_text() {
        let events = translate(ct_key(
            crossterm::event::KeyCode::Char('A'),
            crossterm::event::KeyModifiers::SHIFT,
        ));
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], InputEvent::TextEntered('A'));
    }

    #[test]
    fn ctrl_chord_enters_no_text() {
        let events = translate(ct_key(
            crossterm::event::KeyCode::Char('c'),
            crossterm::event::KeyModifiers::CONTROL,
        ));
        assert_eq!(
            events,
            vec![InputEvent::KeyPressed(KeyEvent::new(Key::Char('c'), Modifiers::CTRL))]
        );
    }

    #[test]
    fn navigation_keys() {
        for (ct_code, expected) in [
            (crossterm::event::KeyCode::Tab, Key::Tab),
            (crossterm::event::KeyCode::BackTab, Key::BackTab),
            (crossterm::event::KeyCode::Left, Key::Left),
            (crossterm::event::KeyCode::Right, Key::Right),
            (crossterm::event::KeyCode::Home, Key::Home),
            (crossterm::event::KeyCode::End, Key::End),
            (crossterm::event::KeyCode::Backspace, Key::Backspace),
            (crossterm::event::KeyCode::Esc, Key::Escape),
        ] {
            let events = translate(ct_key(ct_code, crossterm::event::KeyModifiers::NONE));
            assert_eq!(events, vec![InputEvent::key(expected)]);
        }
    }

    #[test]
    fn key_release() {
        let mut ke = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        );
        ke.kind = crossterm::event::KeyEventKind::Release;
        let events = translate(crossterm::event::Event::Key(ke));
        assert_eq!(events, vec![InputEvent::KeyReleased(KeyEvent::plain(Key::Enter))]);
    }

    #[test]
    fn unsupported_key_is_dropped() {
        let events = translate(ct_key(
            crossterm::event::KeyCode::CapsLock,
            crossterm::event::KeyModifiers::NONE,
        ));
        assert!(events.is_empty());
    }

    // ── translate: mouse and window ──────────────────────────────────

    #[test]
    fn mouse_down_up() {
        let down = translate(ct_mouse(crossterm::event::MouseEventKind::Down(
            crossterm::event::MouseButton::Left,
        )));
        assert_eq!(down, vec![InputEvent::pressed(10, 5)]);

        let up = translate(ct_mouse(crossterm::event::MouseEventKind::Up(
            crossterm::event::MouseButton::Middle,
        )));
        assert_eq!(
            up,
            vec![InputEvent::MouseReleased {
                position: Offset::new(10, 5),
                button: MouseButton::Middle
            }]
        );
    }

    #[test]
    fn drag_becomes_move() {
        let events = translate(ct_mouse(crossterm::event::MouseEventKind::Drag(
            crossterm::event::MouseButton::Left,
        )));
        assert_eq!(events, vec![InputEvent::moved(10, 5)]);
    }

    #[test]
    fn scroll_becomes_wheel() {
        let up = translate(ct_mouse(crossterm::event::MouseEventKind::ScrollUp));
        assert_eq!(up, vec![InputEvent::MouseWheel { position: Offset::new(10, 5), delta: 1 }]);
        let down = translate(ct_mouse(crossterm::event::MouseEventKind::ScrollDown));
        assert_eq!(
            down,
            vec![InputEvent::MouseWheel { position: Offset::new(10, 5), delta: -1 }]
        );
    }

    #[test]
    fn resize_and_paste() {
        assert_eq!(
            translate(crossterm::event::Event::Resize(120, 40)),
            vec![InputEvent::Resized { width: 120, height: 40 }]
        );
        assert_eq!(
            translate(crossterm::event::Event::Paste("hi".to_string())),
            vec![InputEvent::TextEntered('h'), InputEvent::TextEntered('i')]
        );
        assert!(translate(crossterm::event::Event::FocusLost).is_empty());
    }
}
