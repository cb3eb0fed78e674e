//! Image widget: shows a texture, or a cropped part of one.

use std::any::Any;
use std::sync::Arc;

use crate::geometry::{round_px, Region, Size};
use crate::theme::Texture;
use crate::widget::context::WidgetCtx;
use crate::widget::traits::Widget;

/// Where an image gets its texture from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A texture loaded by the host.
    Texture(Arc<Texture>),
    /// The current theme's texture atlas; follows theme switches.
    Theme,
}

/// A passive texture view.
///
/// The natural size is the crop rectangle (or the whole texture) times the
/// scale factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    source: ImageSource,
    texture: Arc<Texture>,
    crop: Option<Region>,
    scale: f32,
}

impl Image {
    /// An image of a host-loaded texture.
    pub fn new(texture: Arc<Texture>) -> Self {
        Self {
            source: ImageSource::Texture(texture.clone()),
            texture,
            crop: None,
            scale: 1.0,
        }
    }

    /// An image of the theme texture atlas.
    pub fn themed() -> Self {
        Self {
            source: ImageSource::Theme,
            texture: Arc::new(Texture::blank()),
            crop: None,
            scale: 1.0,
        }
    }

    /// Show only `crop` of the texture (builder pattern).
    pub fn with_crop(mut self, crop: Region) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = sanitize_scale(scale);
        self
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// The texture currently shown.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn crop(&self) -> Option<Region> {
        self.crop
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Switch to another host texture and resize.
    pub fn set_texture(&mut self, ctx: &mut WidgetCtx<'_>, texture: Arc<Texture>) {
        self.source = ImageSource::Texture(texture.clone());
        self.texture = texture;
        ctx.set_size(self.natural_size());
    }

    /// Change or clear the crop rectangle and resize.
    pub fn set_crop(&mut self, ctx: &mut WidgetCtx<'_>, crop: Option<Region>) {
        self.crop = crop;
        ctx.set_size(self.natural_size());
    }

    pub fn set_scale(&mut self, ctx: &mut WidgetCtx<'_>, scale: f32) {
        self.scale = sanitize_scale(scale);
        ctx.set_size(self.natural_size());
    }

    fn natural_size(&self) -> Size {
        let base = self.crop.map_or(self.texture.size, Region::size);
        Size::new(
            round_px(base.width as f32 * self.scale),
            round_px(base.height as f32 * self.scale),
        )
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

impl Widget for Image {
    fn widget_type(&self) -> &str {
        "Image"
    }

    fn selectable(&self) -> bool {
        false
    }

    fn on_theme_changed(&mut self, ctx: &mut WidgetCtx<'_>) {
        if self.source == ImageSource::Theme {
            self.texture = ctx.theme().texture.clone();
        }
        ctx.set_size(self.natural_size());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeConfig};
    use crate::widget::state::WidgetState;

    fn texture(w: i32, h: i32) -> Arc<Texture> {
        Arc::new(Texture::new("logo.png", Size::new(w, h)))
    }

    #[test]
    fn size_from_crop_and_scale() {
        let theme = Theme::default();
        let mut image = Image::new(texture(64, 32)).with_scale(0.5);
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Default);
        image.on_theme_changed(&mut ctx);
        assert_eq!(ctx.requested_size(), Some(Size::new(32, 16)));

        image.set_crop(&mut ctx, Some(Region::new(0, 33, 24, 28)));
        assert_eq!(ctx.size(), Size::new(12, 14));
        image.set_scale(&mut ctx, f32::NAN);
        assert_eq!(image.scale(), 1.0);
        assert_eq!(ctx.size(), Size::new(24, 28));
    }

    #[test]
    fn themed_image_follows_the_theme() {
        let mut theme = Theme::builtin(&ThemeConfig::default());
        theme.texture = texture(10, 6);
        let mut image = Image::themed();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Default);
        image.on_theme_changed(&mut ctx);
        assert!(Arc::ptr_eq(image.texture(), &theme.texture));
        assert_eq!(ctx.requested_size(), Some(Size::new(10, 6)));
    }

    #[test]
    fn explicit_texture_ignores_the_theme() {
        let own = texture(4, 4);
        let mut image = Image::new(own.clone());
        let theme = Theme::default();
        let mut ctx = WidgetCtx::new(&theme, Size::ZERO, WidgetState::Default);
        image.on_theme_changed(&mut ctx);
        assert!(Arc::ptr_eq(image.texture(), &own));
        assert!(!image.selectable());
    }
}
