//! Textures attached to datasets.

use image::RgbaImage;

/// An image resource mapped onto a dataset through texture coordinates.
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbaImage,
    repeat: bool,
    interpolate: bool,
}

impl Texture {
    /// Creates a texture from an RGBA image.
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            repeat: false,
            interpolate: true,
        }
    }

    /// Sets whether the texture repeats outside `[0, 1]`.
    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets whether the texture is sampled with linear interpolation.
    #[must_use]
    pub fn with_interpolate(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }

    /// Returns the image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[must_use]
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    #[must_use]
    pub fn interpolate(&self) -> bool {
        self.interpolate
    }
}

/// Selects a texture out of a dataset's texture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSelector<'a> {
    /// The first texture in insertion order.
    First,
    /// The texture at this position; out-of-range falls back to the first.
    Index(usize),
    /// The texture with this name.
    Name(&'a str),
}

impl<'a> From<&'a str> for TextureSelector<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for TextureSelector<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_flags() {
        let tex = Texture::new(RgbaImage::new(4, 2)).with_repeat(true);
        assert_eq!(tex.dimensions(), (4, 2));
        assert!(tex.repeat());
        assert!(tex.interpolate());
        assert!(!tex.with_interpolate(false).interpolate());
    }
}
