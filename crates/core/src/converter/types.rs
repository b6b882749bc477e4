//! Types for the converter module.

use image::ColorType;
use serde::{Deserialize, Serialize};

/// Pixel layout of a decoded source image, grouped by how it is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// 8-bit RGB, written as is.
    Rgb,
    /// Colour with alpha (RGBA at any depth).
    Rgba,
    /// Greyscale with alpha.
    LumaAlpha,
    /// Anything else without alpha (greyscale, 16-bit or float RGB).
    Opaque,
}

impl PixelLayout {
    /// Classifies an `image` colour type.
    pub fn of(color: ColorType) -> Self {
        match color {
            ColorType::Rgb8 => Self::Rgb,
            ColorType::La8 | ColorType::La16 => Self::LumaAlpha,
            c if c.has_alpha() => Self::Rgba,
            _ => Self::Opaque,
        }
    }

    /// Whether the layout carries transparency that must be composited.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba | Self::LumaAlpha)
    }
}

/// Result of a successful transcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeOutput {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel layout the source decoded to.
    pub source_layout: PixelLayout,
    /// Size of the written JPEG.
    pub bytes_written: u64,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}
