//! OptionsBox widget: cycles through a list of labelled values.
//!
//! The box shows the current item's label between two arrows. Values are
//! type-erased behind [`OptionValue`], so one widget type serves every value
//! type and can live in the `Gui` arena like any other widget.

use std::any::Any;
use std::fmt::Debug;

use crate::error::{GuiError, Result};
use crate::event::input::{Key, KeyEvent};
use crate::geometry::{Offset, Size};
use crate::theme::Theme;
use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// OptionValue
// ---------------------------------------------------------------------------

/// A value an [`OptionsBox`] item can hold.
///
/// Implemented for every `Clone + PartialEq + Debug + 'static` type.
pub trait OptionValue: Debug {
    fn clone_box(&self) -> Box<dyn OptionValue>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Whether `other` holds an equal value of the same type.
    fn eq_dyn(&self, other: &dyn OptionValue) -> bool;
}

impl<T> OptionValue for T
where
    T: Clone + PartialEq + Debug + 'static,
{
    fn clone_box(&self) -> Box<dyn OptionValue> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn OptionValue) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }
}

// ---------------------------------------------------------------------------
// OptionsBox
// ---------------------------------------------------------------------------

/// One of the two arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Previous,
    Next,
}

#[derive(Debug)]
struct Item {
    label: String,
    value: Box<dyn OptionValue>,
}

impl Clone for Item {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            value: self.value.clone_box(),
        }
    }
}

/// Selects one item from a list.
///
/// The callback fires whenever the current index changes. Selecting past
/// either end clamps instead of wrapping.
///
/// # Examples
///
/// ```
/// use sfw_core::widgets::OptionsBox;
///
/// let sizes = OptionsBox::new()
///     .with_item("small", 8u32)
///     .with_item("large", 16u32);
/// assert_eq!(sizes.current_label(), Some("small"));
/// assert_eq!(sizes.current_value::<u32>(), Some(&8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsBox {
    items: Vec<Item>,
    current: Option<usize>,
    hovered_arrow: Option<Arrow>,
}

impl OptionsBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item (builder pattern). The first item becomes current.
    pub fn with_item(mut self, label: impl Into<String>, value: impl OptionValue + 'static) -> Self {
        self.push(label.into(), Box::new(value));
        self
    }

    /// Append an item and resize to fit its label.
    ///
    /// The first item becomes current without firing the callback.
    pub fn add_item(
        &mut self,
        ctx: &mut WidgetCtx<'_>,
        label: impl Into<String>,
        value: impl OptionValue + 'static,
    ) {
        self.push(label.into(), Box::new(value));
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    fn push(&mut self, label: String, value: Box<dyn OptionValue>) {
        self.items.push(Item { label, value });
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Make the item at `index` current.
    ///
    /// An out-of-range index fails and leaves the selection unchanged.
    pub fn select(&mut self, ctx: &mut WidgetCtx<'_>, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(GuiError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.update_selection(ctx, index);
        Ok(())
    }

    /// Make the first item labelled `label` current.
    pub fn select_label(&mut self, ctx: &mut WidgetCtx<'_>, label: &str) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.label == label)
            .ok_or_else(|| GuiError::LabelNotFound(label.to_string()))?;
        self.update_selection(ctx, index);
        Ok(())
    }

    /// Make the first item holding `value` current.
    pub fn select_value<T: OptionValue + 'static>(
        &mut self,
        ctx: &mut WidgetCtx<'_>,
        value: &T,
    ) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|item| value.eq_dyn(item.value.as_ref()))
            .ok_or(GuiError::ValueNotFound)?;
        self.update_selection(ctx, index);
        Ok(())
    }

    /// Move to the next item, staying on the last one.
    pub fn select_next(&mut self, ctx: &mut WidgetCtx<'_>) {
        if let Some(current) = self.current {
            let last = self.items.len().saturating_sub(1);
            self.update_selection(ctx, (current + 1).min(last));
        }
    }

    /// Move to the previous item, staying on the first one.
    pub fn select_previous(&mut self, ctx: &mut WidgetCtx<'_>) {
        if let Some(current) = self.current {
            self.update_selection(ctx, current.saturating_sub(1));
        }
    }

    fn update_selection(&mut self, ctx: &mut WidgetCtx<'_>, index: usize) {
        if self.current == Some(index) {
            return;
        }
        self.current = Some(index);
        ctx.fire_callback();
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current_item().map(|item| item.label.as_str())
    }

    /// The current value, if there is one and it is a `T`.
    pub fn current_value<T: 'static>(&self) -> Option<&T> {
        self.current_item()?.value.as_any().downcast_ref::<T>()
    }

    /// Mutable access to the current value, if it is a `T`.
    pub fn current_value_mut<T: 'static>(&mut self) -> Option<&mut T> {
        let index = self.current?;
        self.items.get_mut(index)?.value.as_any_mut().downcast_mut::<T>()
    }

    fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current?)
    }

    /// The arrow under the pointer, if any.
    pub fn hovered_arrow(&self) -> Option<Arrow> {
        self.hovered_arrow
    }

    // ── Geometry ─────────────────────────────────────────────────────

    /// Which arrow a widget-local x falls on: the outer thirds.
    fn arrow_at(size: Size, pos: Offset) -> Option<Arrow> {
        let third = size.width / 3;
        if pos.x < third {
            Some(Arrow::Previous)
        } else if pos.x >= size.width - third {
            Some(Arrow::Next)
        } else {
            None
        }
    }

    fn natural_size(&self, theme: &Theme) -> Size {
        let widest = self
            .items
            .iter()
            .map(|item| theme.measure(&item.label).width)
            .max()
            .unwrap_or(0);
        let arrows = 2 * theme.box_height();
        let frame = 2 * (theme.padding + theme.border_size);
        Size::new(widest + arrows + frame, theme.box_height())
    }
}

impl Widget for OptionsBox {
    fn widget_type(&self) -> &str {
        "OptionsBox"
    }

    fn caption(&self) -> Option<&str> {
        self.current_label()
    }

    /// Clicks are handled per arrow on press.
    fn on_click(&mut self, _ctx: &mut WidgetCtx<'_>) {}

    fn is_activation_key(&self, _key: &KeyEvent) -> bool {
        false
    }

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        ctx.set_size(self.natural_size(ctx.theme()));
    }

    fn on_mouse_moved(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        self.hovered_arrow = Self::arrow_at(ctx.size(), pos);
    }

    fn on_mouse_leave(&mut self, _ctx: &mut WidgetCtx<'_>) {
        self.hovered_arrow = None;
    }

    fn on_mouse_pressed(&mut self, ctx: &mut WidgetCtx<'_>, pos: Offset) {
        match Self::arrow_at(ctx.size(), pos) {
            Some(Arrow::Previous) => self.select_previous(ctx),
            Some(Arrow::Next) => self.select_next(ctx),
            None => {}
        }
    }

    fn on_key_pressed(&mut self, ctx: &mut WidgetCtx<'_>, key: &KeyEvent) {
        match key.code {
            Key::Left => self.select_previous(ctx),
            Key::Right => self.select_next(ctx),
            _ => {}
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::state::WidgetState;

    #[derive(Debug, Clone, PartialEq)]
    enum Shape {
        Circle,
        Square,
    }

    fn shapes() -> OptionsBox {
        OptionsBox::new()
            .with_item("circle", Shape::Circle)
            .with_item("square", Shape::Square)
            .with_item("none", 0u8)
    }

    #[test]
    fn first_item_is_current() {
        let options = shapes();
        assert_eq!(options.current_index(), Some(0));
        assert_eq!(options.current_value::<Shape>(), Some(&Shape::Circle));
        assert_eq!(options.current_value::<u8>(), None);
        assert_eq!(OptionsBox::new().current_label(), None);
    }

    #[test]
    fn select_out_of_range_keeps_index() {
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Focused);
        let mut options = shapes();
        let err = options.select(&mut ctx, 3).unwrap_err();
        assert!(matches!(err, GuiError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(options.current_index(), Some(0));
        assert!(!ctx.callback_requested());
    }

    #[test]
    fn reselecting_is_silent() {
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Focused);
        let mut options = shapes();
        options.select(&mut ctx, 0).unwrap();
        assert!(!ctx.callback_requested());
        options.select_label(&mut ctx, "square").unwrap();
        assert!(ctx.callback_requested());
        assert_eq!(options.current_label(), Some("square"));
    }

    #[test]
    fn select_by_label_and_value() {
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Focused);
        let mut options = shapes();
        assert!(matches!(
            options.select_label(&mut ctx, "hexagon"),
            Err(GuiError::LabelNotFound(_))
        ));
        options.select_value(&mut ctx, &0u8).unwrap();
        assert_eq!(options.current_index(), Some(2));
        assert!(matches!(
            options.select_value(&mut ctx, &"circle"),
            Err(GuiError::ValueNotFound)
        ));
    }

    #[test]
    fn next_and_previous_clamp() {
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Focused);
        let mut options = shapes();
        options.select_previous(&mut ctx);
        assert_eq!(options.current_index(), Some(0));
        for _ in 0..5 {
            options.select_next(&mut ctx);
        }
        assert_eq!(options.current_index(), Some(2));
    }

    #[test]
    fn current_value_mut_edits_in_place() {
        let mut options = OptionsBox::new().with_item("count", 1i32);
        *options.current_value_mut::<i32>().unwrap() += 41;
        assert_eq!(options.current_value::<i32>(), Some(&42));
        let copy = options.clone();
        assert_eq!(copy.current_value::<i32>(), Some(&42));
    }

    #[test]
    fn arrows_by_third() {
        let theme = Theme::default();
        let size = Size::new(90, 16);
        let mut options = shapes();
        let mut ctx = WidgetCtx::new(&theme, size, WidgetState::Pressed);
        options.on_mouse_pressed(&mut ctx, Offset::new(80, 8));
        assert_eq!(options.current_index(), Some(1));
        options.on_mouse_pressed(&mut ctx, Offset::new(45, 8));
        assert_eq!(options.current_index(), Some(1));
        options.on_mouse_pressed(&mut ctx, Offset::new(5, 8));
        assert_eq!(options.current_index(), Some(0));

        options.on_mouse_moved(&mut ctx, Offset::new(85, 8));
        assert_eq!(options.hovered_arrow(), Some(Arrow::Next));
        options.on_mouse_leave(&mut ctx);
        assert_eq!(options.hovered_arrow(), None);
    }

    #[test]
    fn add_item_grows_to_widest_label() {
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Default);
        let mut options = OptionsBox::new();
        options.add_item(&mut ctx, "ab", 1);
        assert_eq!(options.current_index(), Some(0));
        assert!(!ctx.callback_requested());
        // 12 label + 2 * 16 arrows + 4 frame.
        assert_eq!(ctx.size(), Size::new(48, 16));
        options.add_item(&mut ctx, "abcd", 2);
        assert_eq!(ctx.size(), Size::new(60, 16));
    }
}
