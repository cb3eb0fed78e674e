//! Font and texture handles plus the loader seam.
//!
//! Decoding fonts and images belongs to the host. The toolkit only needs text
//! metrics for sizing and an opaque texture handle to pass to the renderer.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::geometry::{round_px, Size};

/// A loaded font, reduced to the metrics the layout needs.
///
/// Metrics are expressed as ratios of the character size, so one font serves
/// every text size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    /// Horizontal advance per character, as a fraction of the text size.
    pub advance: f32,
    /// Line height as a fraction of the text size.
    pub line_height: f32,
}

impl Font {
    /// A font with explicit metrics.
    pub fn new(name: impl Into<String>, advance: f32, line_height: f32) -> Self {
        Self {
            name: name.into(),
            advance,
            line_height,
        }
    }

    /// Fixed-pitch fallback used when no font file is configured.
    pub fn builtin() -> Self {
        Self::new("builtin", 0.5, 1.0)
    }

    /// Width of a single glyph at `text_size`.
    pub fn glyph_width(&self, text_size: u32) -> i32 {
        round_px(text_size as f32 * self.advance)
    }

    /// Height of one line at `text_size`.
    pub fn line_height(&self, text_size: u32) -> i32 {
        round_px(text_size as f32 * self.line_height)
    }

    /// Bounding size of `text` on one line at `text_size`.
    pub fn measure(&self, text: &str, text_size: u32) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(
            round_px(chars * text_size as f32 * self.advance),
            self.line_height(text_size),
        )
    }
}

/// A loaded texture atlas, opaque to the core apart from its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub path: PathBuf,
    pub size: Size,
}

impl Texture {
    pub fn new(path: impl Into<PathBuf>, size: Size) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Empty placeholder used when no texture is configured.
    pub fn blank() -> Self {
        Self::new(PathBuf::new(), Size::ZERO)
    }
}

/// Supplies fonts and textures to [`Theme::load`](super::Theme::load).
///
/// Failures are surfaced to the caller once; the core never retries.
pub trait AssetLoader {
    fn load_font(&self, path: &Path) -> Result<Font>;
    fn load_texture(&self, path: &Path) -> Result<Texture>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_metrics() {
        let font = Font::builtin();
        assert_eq!(font.glyph_width(12), 6);
        assert_eq!(font.line_height(12), 12);
        assert_eq!(font.measure("Hello", 12), Size::new(30, 12));
    }

    #[test]
    fn measure_counts_chars_not_bytes() {
        let font = Font::new("mono", 1.0, 1.5);
        assert_eq!(font.measure("héllo", 10), Size::new(50, 15));
        assert_eq!(font.measure("", 10), Size::new(0, 15));
    }

    #[test]
    fn blank_texture_is_empty() {
        assert_eq!(Texture::blank().size, Size::ZERO);
    }
}
