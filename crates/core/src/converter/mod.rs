//! Converter module for transcoding source images to JPEG.
//!
//! This module provides the `Transcoder` trait and an implementation backed by
//! the `image` crate for decoding and `jpeg-encoder` for output.
//!
//! # Features
//!
//! - AVIF decoding (with the `avif-native` feature, via libdav1d)
//! - Transparent and palette images flattened onto an opaque background
//! - Baseline JPEG output with configurable quality and optimized Huffman tables
//! - Startup capability check with an operator-facing diagnostic
//!
//! # Example
//!
//! ```ignore
//! use avif2jpg_core::converter::{ConverterConfig, ImageTranscoder, Transcoder};
//!
//! let transcoder = ImageTranscoder::new(ConverterConfig::default());
//!
//! // Fails fast when the build cannot decode AVIF
//! transcoder.validate()?;
//!
//! let out = transcoder.transcode(Path::new("in/guest.avif"), Path::new("out/guest.jpg"))?;
//! println!("{}x{} in {} ms", out.width, out.height, out.duration_ms);
//! ```

mod capabilities;
mod config;
mod error;
mod image_transcoder;
mod traits;
mod types;

pub use capabilities::CodecCapabilities;
pub use config::ConverterConfig;
pub use error::ConverterError;
pub use image_transcoder::{encode_jpeg, flatten_to_rgb, ImageTranscoder};
pub use traits::Transcoder;
pub use types::{PixelLayout, TranscodeOutput};
