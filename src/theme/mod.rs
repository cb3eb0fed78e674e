//! Theme: the visual style shared by every widget of one `Gui`.
//!
//! A [`Theme`] is owned by its `Gui` and lent to widget hooks through the
//! widget context. Switching themes builds the replacement first, so a failed
//! asset load leaves the active theme untouched.

pub mod assets;
pub mod color;
pub mod config;

use std::sync::Arc;

use tracing::debug;

pub use assets::{AssetLoader, Font, Texture};
pub use color::Color;
pub use config::{InputColors, TextColors, ThemeConfig};

use crate::error::Result;
use crate::geometry::Size;

/// Resolved style: metrics, loaded assets and colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub padding: i32,
    pub border_size: i32,
    /// Spacing between stacked children.
    pub margin: i32,
    pub text_size: u32,
    pub font: Arc<Font>,
    pub texture: Arc<Texture>,
    pub window_background: Color,
    /// Colors for clickable widgets (buttons, labels, check boxes, options).
    pub click: TextColors,
    /// Colors for editable widgets.
    pub input: InputColors,
}

impl Theme {
    /// Build a theme, loading any configured assets through `loader`.
    pub fn load(config: &ThemeConfig, loader: &dyn AssetLoader) -> Result<Self> {
        let font = match &config.font {
            Some(path) => Arc::new(loader.load_font(path)?),
            None => Arc::new(Font::builtin()),
        };
        let texture = match &config.texture {
            Some(path) => Arc::new(loader.load_texture(path)?),
            None => Arc::new(Texture::blank()),
        };
        debug!(font = %font.name, texture = ?texture.path, "theme loaded");
        Ok(Self::assemble(config, font, texture))
    }

    /// Build a theme from a config that names no asset files.
    ///
    /// Configured asset paths are ignored in favour of the builtin font and a
    /// blank texture.
    pub fn builtin(config: &ThemeConfig) -> Self {
        Self::assemble(config, Arc::new(Font::builtin()), Arc::new(Texture::blank()))
    }

    fn assemble(config: &ThemeConfig, font: Arc<Font>, texture: Arc<Texture>) -> Self {
        Self {
            padding: config.padding,
            border_size: config.border_size,
            margin: config.margin,
            text_size: config.text_size,
            font,
            texture,
            window_background: config.window_background,
            click: config.click,
            input: config.input,
        }
    }

    /// Size of `text` at the theme's text size.
    pub fn measure(&self, text: &str) -> Size {
        self.font.measure(text, self.text_size)
    }

    /// Height of one line of text at the theme's text size.
    pub fn line_height(&self) -> i32 {
        self.font.line_height(self.text_size)
    }

    /// Outer height of a framed one-line widget (text, padding and border).
    pub fn box_height(&self) -> i32 {
        self.line_height() + 2 * self.padding + 2 * self.border_size
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin(&ThemeConfig::default())
    }
}
