//! TextBox widget: a one-line text editor.
//!
//! Supports cursor movement, character insertion and deletion, a placeholder,
//! a maximum length and a single selection range. Enter fires the callback.

use std::any::Any;
use std::ops::Range;

use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::geometry::Offset;
use crate::widget::context::WidgetCtx;
use crate::widget::state::WidgetState;
use crate::widget::traits::Widget;

/// Default maximum number of characters.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// Default outer width in pixels.
pub const DEFAULT_WIDTH: i32 = 200;

// ---------------------------------------------------------------------------
// TextBox
// ---------------------------------------------------------------------------

/// A one-line text editor.
///
/// Positions (cursor, selection) count characters, not bytes, so editing is
/// safe for any UTF-8 content.
///
/// # Examples
///
/// ```
/// use sfw_core::widgets::TextBox;
///
/// let name = TextBox::new()
///     .with_placeholder("Your name")
///     .with_max_length(32);
/// assert_eq!(name.text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    text: String,
    placeholder: String,
    /// Cursor position, in characters.
    cursor: usize,
    max_length: usize,
    width: i32,
    /// Anchor of the selection; the other end is the cursor.
    anchor: Option<usize>,
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            cursor: 0,
            max_length: DEFAULT_MAX_LENGTH,
            width: DEFAULT_WIDTH,
            anchor: None,
        }
    }

    /// Set the outer width (builder pattern).
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width.max(0);
        self
    }

    /// Set the placeholder text (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial content (builder pattern).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the maximum length (builder pattern).
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.set_max_length(max_length);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the content.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content, truncated to the maximum length. The cursor moves
    /// to the end and any selection is dropped.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        self.text = text.chars().take(self.max_length).collect();
        self.cursor = self.len();
        self.anchor = None;
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Change the maximum length, truncating longer content.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
        if self.len() > max_length {
            let text = std::mem::take(&mut self.text);
            self.set_text(text);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the content. Clears the selection.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.len());
        self.anchor = None;
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Select the characters between `from` and `to` (in either order). The
    /// cursor ends at `to`.
    pub fn set_selection(&mut self, from: usize, to: usize) {
        let len = self.len();
        self.anchor = Some(from.min(len));
        self.cursor = to.min(len);
    }

    /// The selected character range, if it is non-empty.
    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let range = anchor.min(self.cursor)..anchor.max(self.cursor);
        (!range.is_empty()).then_some(range)
    }

    pub fn selected_text(&self) -> &str {
        match self.selection() {
            Some(range) => &self.text[self.byte_range(range)],
            None => "",
        }
    }

    /// Remove the selected characters. Returns whether anything was removed.
    pub fn delete_selected_text(&mut self) -> bool {
        let Some(range) = self.selection() else {
            self.anchor = None;
            return false;
        };
        let bytes = self.byte_range(range.clone());
        self.text.replace_range(bytes, "");
        self.cursor = range.start;
        self.anchor = None;
        true
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Insert a character at the cursor, replacing the selection.
    ///
    /// Control characters are ignored, as is input past the maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let had_selection = self.delete_selected_text();
        if self.len() >= self.max_length {
            return had_selection;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor, or the selection.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selected_text() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character after the cursor, or the selection.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selected_text() {
            return true;
        }
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Move the cursor to `index`, extending the selection when `extend`.
    fn move_cursor(&mut self, index: usize, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = index.min(self.len());
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(at, _)| at)
    }

    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        self.byte_offset(range.start)..self.byte_offset(range.end)
    }

    /// Character index nearest to a widget-local x coordinate.
    fn index_at(&self, ctx: &WidgetCtx<'_>, x: i32) -> usize {
        let theme = ctx.theme();
        let glyph = theme.font.glyph_width(theme.text_size).max(1);
        let inner = x - theme.padding - theme.border_size;
        let index = (inner + glyph / 2).max(0) / glyph;
        (index as usize).min(self.len())
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextBox {
    fn widget_type(&self) -> &str {
        "TextBox"
    }

    fn caption(&self) -> Option<&str> {
        if self.text.is_empty() {
            Some(&self.placeholder)
        } else {
            Some(&self.text)
        }
    }

    /// Space and Enter are text, not activation.
    fn is_activation_key(&self, _key: &KeyEvent) -> bool {
        false
    }

    fn on_click(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        let height = ctx.theme().box_height();
        ctx.set_size((self.width, height));
    }

    fn on_mouse_pressed(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        let index = self.index_at(ctx, pos.x);
        self.set_cursor(index);
    }

    fn on_mouse_moved(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        if ctx.state() == WidgetState::Pressed {
            let index = self.index_at(ctx, pos.x);
            self.move_cursor(index, true);
        }
    }

    fn on_key_pressed(&mut self, ctx: &mut WidgetCtx<'_>, key: &KeyEvent) {
        let extend = key.modifiers.contains(Modifiers::SHIFT);
        match key.code {
            // Without Shift, an arrow collapses the selection to that side.
            Key::Left => match self.selection().filter(|_| !extend) {
                Some(range) => self.move_cursor(range.start, false),
                None => self.move_cursor(self.cursor.saturating_sub(1), extend),
            },
            Key::Right => match self.selection().filter(|_| !extend) {
                Some(range) => self.move_cursor(range.end, false),
                None => self.move_cursor(self.cursor + 1, extend),
            },
            Key::Home => self.move_cursor(0, extend),
            Key::End => self.move_cursor(self.len(), extend),
            Key::Backspace => {
                self.backspace();
            }
            Key::Delete => {
                self.delete_forward();
            }
            Key::Char('a') if key.modifiers.contains(Modifiers::CTRL) => {
                self.set_selection(0, self.len());
            }
            Key::Enter => ctx.fire_callback(),
            _ => {}
        }
    }

    fn on_text_entered(&mut self, _ctx: &mut WidgetCtx<'_>, ch: char) {
        self.insert_char(ch);
    }

    fn on_focus_lost(&mut self, _ctx: &mut WidgetCtx<'_>) {
        self.anchor = None;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
