//! Recording renderer and stub asset loader.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{GuiError, Result};
use crate::geometry::{Region, Size};
use crate::render::{DrawItem, Renderer};
use crate::theme::{AssetLoader, Color, Font, Texture};
use crate::tree::WidgetId;
use crate::widget::state::WidgetState;

// ---------------------------------------------------------------------------
// RecordingRenderer
// ---------------------------------------------------------------------------

/// An owned copy of one draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedItem {
    pub id: WidgetId,
    pub widget_type: String,
    pub bounds: Region,
    pub state: WidgetState,
    pub hovered: bool,
    pub depth: usize,
    pub caption: Option<String>,
}

/// A [`Renderer`] that records draw calls instead of drawing.
///
/// # Examples
///
/// ```
/// use sfw_core::gui::{Gui, GuiConfig};
/// use sfw_core::testing::RecordingRenderer;
/// use sfw_core::theme::Theme;
/// use sfw_core::widgets::Button;
///
/// let mut gui = Gui::new(GuiConfig::default(), Theme::default());
/// gui.add(gui.root(), Button::new("OK")).unwrap();
/// let mut recorder = RecordingRenderer::new();
/// gui.render(&mut recorder);
/// assert_eq!(recorder.items().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    items: Vec<RecordedItem>,
    background: Option<Color>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the most recent frame, in draw order.
    pub fn items(&self) -> &[RecordedItem] {
        &self.items
    }

    /// Background color of the most recent frame.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// One line per item, indented by depth:
    /// `Type x,y WxH state [hovered] "caption"`.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let b = item.bounds;
            let _ = write!(
                out,
                "{:indent$}{} {},{} {}x{} {:?}",
                "",
                item.widget_type,
                b.x,
                b.y,
                b.width,
                b.height,
                item.state,
                indent = item.depth * 2,
            );
            if item.hovered {
                out.push_str(" hovered");
            }
            if let Some(caption) = &item.caption {
                let _ = write!(out, " {caption:?}");
            }
        }
        out
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, background: Color) {
        self.items.clear();
        self.background = Some(background);
    }

    fn draw(&mut self, item: &DrawItem<'_>) {
        self.items.push(RecordedItem {
            id: item.id,
            widget_type: item.widget.widget_type().to_string(),
            bounds: item.bounds(),
            state: item.state,
            hovered: item.hovered,
            depth: item.depth,
            caption: item.widget.caption().map(str::to_string),
        });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

// ---------------------------------------------------------------------------
// StubAssets
// ---------------------------------------------------------------------------

/// An [`AssetLoader`] serving fonts and textures from memory.
///
/// Unknown paths fail with [`GuiError::Asset`].
#[derive(Debug, Clone, Default)]
pub struct StubAssets {
    fonts: HashMap<PathBuf, Font>,
    textures: HashMap<PathBuf, Size>,
}

impl StubAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>, font: Font) -> Self {
        self.fonts.insert(path.into(), font);
        self
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>, size: Size) -> Self {
        self.textures.insert(path.into(), size);
        self
    }
}

fn missing(kind: &'static str, path: &Path) -> GuiError {
    GuiError::Asset {
        kind,
        path: path.to_path_buf(),
        message: "no such asset".into(),
    }
}

impl AssetLoader for StubAssets {
    fn load_font(&self, path: &Path) -> Result<Font> {
        self.fonts.get(path).cloned().ok_or_else(|| missing("font", path))
    }

    fn load_texture(&self, path: &Path) -> Result<Texture> {
        self.textures
            .get(path)
            .map(|&size| Texture::new(path, size))
            .ok_or_else(|| missing("texture", path))
    }
}
