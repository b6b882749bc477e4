//! `image`-based transcoder implementation.

use image::{DynamicImage, ImageReader, Rgb, RgbImage, RgbaImage};
use jpeg_encoder::{ColorType as JpegColorType, Encoder};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use super::capabilities::CodecCapabilities;
use super::config::ConverterConfig;
use super::error::ConverterError;
use super::traits::Transcoder;
use super::types::{PixelLayout, TranscodeOutput};

/// Transcoder that decodes with the `image` crate and encodes baseline JPEG.
pub struct ImageTranscoder {
    config: ConverterConfig,
    capabilities: CodecCapabilities,
}

impl ImageTranscoder {
    /// Creates a new transcoder with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            capabilities: CodecCapabilities::detect(),
        }
    }

    /// Creates a transcoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Overrides the detected codec capabilities.
    pub fn with_capabilities(mut self, capabilities: CodecCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns the encoder settings.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Returns the capabilities this transcoder validates against.
    pub fn capabilities(&self) -> CodecCapabilities {
        self.capabilities
    }

    fn decode(path: &Path) -> Result<DynamicImage, ConverterError> {
        let reader = ImageReader::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConverterError::InputNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConverterError::Io(e)
            }
        })?;

        // Content sniffing wins over the extension, which is kept as fallback.
        let reader = reader.with_guessed_format()?;

        reader.decode().map_err(|e| ConverterError::DecodeFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl Transcoder for ImageTranscoder {
    fn name(&self) -> &str {
        "image"
    }

    fn validate(&self) -> Result<(), ConverterError> {
        self.capabilities.ensure_avif_supported()?;

        if !(1..=100).contains(&self.config.quality) {
            return Err(ConverterError::invalid_settings(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.config.quality
            )));
        }

        Ok(())
    }

    fn transcode(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<TranscodeOutput, ConverterError> {
        let started = Instant::now();

        let image = Self::decode(source)?;
        let (width, height) = (image.width(), image.height());
        let source_layout = PixelLayout::of(image.color());
        debug!(
            "Decoded {:?}: {}x{} {:?}",
            source,
            width,
            height,
            image.color()
        );

        let rgb = flatten_to_rgb(image, self.config.background);
        let jpeg = encode_jpeg(&rgb, &self.config)?;

        fs::write(destination, &jpeg).map_err(|e| ConverterError::WriteFailed {
            path: destination.to_path_buf(),
            source: e,
        })?;

        Ok(TranscodeOutput {
            width,
            height,
            source_layout,
            bytes_written: jpeg.len() as u64,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}

/// Normalises any decoded image to opaque 8-bit RGB.
///
/// Layouts with alpha are composited onto `background` using their own alpha
/// channel; everything else is converted directly.
pub fn flatten_to_rgb(image: DynamicImage, background: [u8; 3]) -> RgbImage {
    match PixelLayout::of(image.color()) {
        PixelLayout::Rgb => image.into_rgb8(),
        PixelLayout::Rgba | PixelLayout::LumaAlpha => composite(&image.into_rgba8(), background),
        PixelLayout::Opaque => image.into_rgb8(),
    }
}

fn composite(rgba: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::from_pixel(width, height, Rgb(background));

    for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3] as u32;
        for c in 0..3 {
            let blended = src[c] as u32 * alpha + background[c] as u32 * (255 - alpha);
            dst[c] = ((blended + 127) / 255) as u8;
        }
    }

    out
}

/// Encodes an RGB image as JPEG in memory.
pub fn encode_jpeg(rgb: &RgbImage, config: &ConverterConfig) -> Result<Vec<u8>, ConverterError> {
    let (width, height) = rgb.dimensions();
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(ConverterError::DimensionsTooLarge { width, height }),
    };

    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, config.quality);
    encoder.set_optimized_huffman_tables(config.optimize);
    encoder
        .encode(rgb.as_raw(), w, h, JpegColorType::Rgb)
        .map_err(|e| ConverterError::encode_failed(e.to_string()))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, ImageFormat, LumaA, Rgba};
    use tempfile::TempDir;

    /// Left half fully transparent, right half opaque red.
    fn half_transparent(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([200, 40, 40, 255])
            }
        })
    }

    #[test]
    fn test_flatten_rgb_passthrough() {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let out = flatten_to_rgb(DynamicImage::ImageRgb8(rgb.clone()), [255, 255, 255]);
        assert_eq!(out, rgb);
    }

    #[test]
    fn test_flatten_transparent_becomes_background() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(rgba), [255, 255, 255]);
        assert!(out.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_flatten_opaque_rgba_keeps_colour() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([12, 34, 56, 255]));
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(rgba), [255, 255, 255]);
        assert!(out.pixels().all(|p| p.0 == [12, 34, 56]));
    }

    #[test]
    fn test_flatten_half_alpha_blends() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(rgba), [255, 255, 255]);
        // 127 * 255 / 255, rounded
        assert_eq!(out.get_pixel(0, 0).0, [127, 127, 127]);
    }

    #[test]
    fn test_flatten_custom_background() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));
        let out = flatten_to_rgb(DynamicImage::ImageRgba8(rgba), [0, 64, 0]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 64, 0]);
    }

    #[test]
    fn test_flatten_luma_alpha_uses_alpha() {
        let la = GrayAlphaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                LumaA([50, 255])
            } else {
                LumaA([50, 0])
            }
        });
        let out = flatten_to_rgb(DynamicImage::ImageLumaA8(la), [255, 255, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [50, 50, 50]);
        assert_eq!(out.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_luma_converts_directly() {
        let gray = GrayImage::from_pixel(2, 2, image::Luma([77]));
        let out = flatten_to_rgb(DynamicImage::ImageLuma8(gray), [255, 0, 0]);
        assert!(out.pixels().all(|p| p.0 == [77, 77, 77]));
    }

    #[test]
    fn test_encode_jpeg_round_trip_dimensions() {
        let rgb = RgbImage::from_fn(37, 21, |x, y| Rgb([(x * 6) as u8, (y * 12) as u8, 128]));
        let bytes = encode_jpeg(&rgb, &ConverterConfig::default()).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (37, 21));
    }

    #[test]
    fn test_encode_jpeg_without_optimization() {
        let rgb = RgbImage::from_pixel(16, 16, Rgb([90, 90, 90]));
        let config = ConverterConfig::default().with_optimize(false);
        let bytes = encode_jpeg(&rgb, &config).unwrap();
        assert!(image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).is_ok());
    }

    #[test]
    fn test_encode_jpeg_rejects_oversized() {
        let rgb = RgbImage::new(70_000, 1);
        let err = encode_jpeg(&rgb, &ConverterConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ConverterError::DimensionsTooLarge {
                width: 70_000,
                height: 1
            }
        ));
    }

    #[test]
    fn test_transcode_transparent_png_to_white() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("logo.png");
        let destination = dir.path().join("logo.jpg");
        half_transparent(32, 32).save(&source).unwrap();

        let transcoder = ImageTranscoder::with_defaults();
        let out = transcoder.transcode(&source, &destination).unwrap();
        assert_eq!((out.width, out.height), (32, 32));
        assert_eq!(out.source_layout, PixelLayout::Rgba);
        assert_eq!(out.bytes_written, fs::metadata(&destination).unwrap().len());

        let jpeg = image::open(&destination).unwrap().into_rgb8();
        let px = jpeg.get_pixel(4, 16);
        assert!(px.0.iter().all(|&c| c >= 245), "expected white, got {:?}", px);
    }

    #[test]
    fn test_transcode_corrupt_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("bad.avif");
        let destination = dir.path().join("bad.jpg");
        fs::write(&source, b"definitely not an image").unwrap();

        let err = ImageTranscoder::with_defaults()
            .transcode(&source, &destination)
            .unwrap_err();
        assert!(matches!(err, ConverterError::DecodeFailed { .. }));
        assert!(!err.is_fatal());
        assert!(!destination.exists());
    }

    #[test]
    fn test_transcode_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = ImageTranscoder::with_defaults()
            .transcode(&dir.path().join("missing.avif"), &dir.path().join("x.jpg"))
            .unwrap_err();
        assert!(matches!(err, ConverterError::InputNotFound { .. }));
    }

    #[test]
    fn test_transcode_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("ok.png");
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])).save(&source).unwrap();

        let err = ImageTranscoder::with_defaults()
            .transcode(&source, &dir.path().join("no-such-dir").join("ok.jpg"))
            .unwrap_err();
        assert!(matches!(err, ConverterError::WriteFailed { .. }));
    }

    #[test]
    fn test_validate_without_avif_support() {
        let transcoder =
            ImageTranscoder::with_defaults().with_capabilities(CodecCapabilities::default());
        let err = transcoder.validate().unwrap_err();
        assert!(matches!(err, ConverterError::CodecUnavailable { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_quality() {
        let caps = CodecCapabilities { avif_decode: true };
        let transcoder = ImageTranscoder::new(ConverterConfig::default().with_quality(0))
            .with_capabilities(caps);
        assert!(matches!(
            transcoder.validate(),
            Err(ConverterError::InvalidSettings { .. })
        ));

        let transcoder = ImageTranscoder::with_defaults().with_capabilities(caps);
        assert!(transcoder.validate().is_ok());
    }

    #[cfg(not(feature = "avif-native"))]
    #[test]
    fn test_default_build_fails_validation() {
        let err = ImageTranscoder::with_defaults().validate().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("avif-native"));
    }

    #[cfg(feature = "avif-native")]
    #[test]
    fn test_native_build_passes_validation() {
        assert!(ImageTranscoder::with_defaults().validate().is_ok());
    }
}
