//! Configuration for the converter module.

use serde::{Deserialize, Serialize};

/// Encoder settings for the image transcoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// JPEG quality (1-100).
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Whether to build optimized Huffman tables for each image.
    #[serde(default = "default_true")]
    pub optimize: bool,

    /// Background colour that transparent pixels are flattened onto.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
}

fn default_quality() -> u8 {
    90
}

fn default_true() -> bool {
    true
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            optimize: true,
            background: default_background(),
        }
    }
}

impl ConverterConfig {
    /// Sets the JPEG quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Enables or disables Huffman table optimization.
    pub fn with_optimize(mut self, enabled: bool) -> Self {
        self.optimize = enabled;
        self
    }

    /// Sets the background colour for flattening.
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }
}
