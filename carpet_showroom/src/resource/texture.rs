/// Resource-level texture types.
///
/// A `Texture` is decoded pixel data plus the sampling conventions the
/// renderer needs to interpret it (vertical flip, color space). Decoding
/// image files is the asset loader's job; this crate only receives RGBA8.

use std::sync::Arc;
use crate::error::Result;
use crate::engine_bail;

// ===== DATA TYPES =====

/// How texel values should be interpreted by the shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Raw values (normal maps, roughness, ...)
    #[default]
    Linear,
    /// sRGB-encoded color (base color maps authored in glTF)
    Srgb,
}

/// Where a replacement texture comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSource {
    /// Remote or bundled image reference
    Url(String),
    /// User-uploaded file held in memory
    Bytes {
        /// Original file name, for logging
        name: String,
        /// Encoded image bytes
        data: Arc<[u8]>,
    },
}

impl TextureSource {
    /// Human-readable reference used in logs and cache keys
    pub fn reference(&self) -> &str {
        match self {
            TextureSource::Url(url) => url,
            TextureSource::Bytes { name, .. } => name,
        }
    }
}

// ===== TEXTURE =====

/// Decoded RGBA8 texture
#[derive(Debug, Clone)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
    flip_y: bool,
    color_space: ColorSpace,
}

impl Texture {
    /// Create a texture from tightly packed RGBA8 pixels.
    ///
    /// Defaults follow generic image loaders: `flip_y = true`, linear color space.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero or the pixel buffer length does
    /// not equal `width * height * 4`.
    pub fn from_rgba8(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let name = name.into();
        if width == 0 || height == 0 {
            engine_bail!("showroom::Texture", "Texture '{}' has zero size {}x{}", name, width, height);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            engine_bail!("showroom::Texture",
                "Texture '{}': expected {} bytes for {}x{} RGBA8, got {}",
                name, expected, width, height, pixels.len());
        }
        Ok(Self {
            name,
            width,
            height,
            pixels: pixels.into(),
            flip_y: true,
            color_space: ColorSpace::Linear,
        })
    }

    /// Single-color 1x1 texture
    pub fn solid(name: impl Into<String>, rgba: [u8; 4]) -> Self {
        Self {
            name: name.into(),
            width: 1,
            height: 1,
            pixels: Arc::from(rgba.to_vec()),
            flip_y: true,
            color_space: ColorSpace::Linear,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether rows are flipped vertically on upload
    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn set_flip_y(&mut self, flip_y: bool) {
        self.flip_y = flip_y;
    }

    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    /// Configure sampling to match glTF-authored color maps
    /// (top-left UV origin, sRGB encoding).
    pub fn configure_as_gltf_color_map(&mut self) {
        self.flip_y = false;
        self.color_space = ColorSpace::Srgb;
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
