//! Declarative theme configuration (TOML).

use std::path::PathBuf;

use serde::Deserialize;

use super::color::Color;
use crate::error::Result;
use crate::widget::state::WidgetState;

/// Text colors for one widget category, per interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextColors {
    pub normal: Color,
    pub hover: Color,
    pub focus: Color,
}

impl TextColors {
    /// The color a widget in `state` should draw its text with.
    pub fn resolve(&self, state: WidgetState) -> Color {
        match state {
            WidgetState::Default | WidgetState::Disabled => self.normal,
            WidgetState::Hovered => self.hover,
            WidgetState::Focused | WidgetState::Pressed => self.focus,
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        let ink = Color::rgb(0x19, 0x1b, 0x18);
        Self {
            normal: ink,
            hover: ink,
            focus: Color::BLACK,
        }
    }
}

/// Colors for editable widgets: state colors plus selection and placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputColors {
    pub normal: Color,
    pub hover: Color,
    pub focus: Color,
    pub selection: Color,
    pub placeholder: Color,
}

impl InputColors {
    /// The per-state subset.
    pub fn text(&self) -> TextColors {
        TextColors {
            normal: self.normal,
            hover: self.hover,
            focus: self.focus,
        }
    }
}

impl Default for InputColors {
    fn default() -> Self {
        Self {
            normal: Color::BLACK,
            hover: Color::BLACK,
            focus: Color::BLACK,
            selection: Color::rgb(0x87, 0x91, 0xad),
            placeholder: Color::rgb(0x87, 0x91, 0xad),
        }
    }
}

/// Everything needed to build a [`Theme`](super::Theme).
///
/// Every field is optional in TOML; missing ones take the built-in defaults.
///
/// ```toml
/// font = "assets/verdana.ttf"
/// texture = "assets/texture-win98.png"
/// text_size = 11
/// padding = 2
/// window_background = "#d4d0c8"
///
/// [input]
/// selection = "#8791ad"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Font file handed to the asset loader. `None` uses the builtin metrics.
    pub font: Option<PathBuf>,
    /// Texture atlas handed to the asset loader. `None` uses a blank texture.
    pub texture: Option<PathBuf>,
    pub text_size: u32,
    pub padding: i32,
    pub border_size: i32,
    /// Spacing between stacked children.
    pub margin: i32,
    pub window_background: Color,
    pub click: TextColors,
    pub input: InputColors,
}

impl ThemeConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture = Some(path.into());
        self
    }

    pub fn with_text_size(mut self, size: u32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_window_background(mut self, color: Color) -> Self {
        self.window_background = color;
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font: None,
            texture: None,
            text_size: 12,
            padding: 1,
            border_size: 1,
            margin: 7,
            window_background: Color::rgb(0xe6, 0xe8, 0xe0),
            click: TextColors::default(),
            input: InputColors::default(),
        }
    }
}
