//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The build has no decoder (or encoder) for a required format.
    #[error("{format} support is not available: {hint}")]
    CodecUnavailable { format: String, hint: String },

    /// Input file not found.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Source image could not be decoded.
    #[error("Failed to decode {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image is larger than a JPEG can represent.
    #[error("Image dimensions {width}x{height} exceed the JPEG limit of 65535")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// JPEG encoding failed.
    #[error("Failed to encode JPEG: {reason}")]
    EncodeFailed { reason: String },

    /// Output could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid encoder settings.
    #[error("Invalid converter settings: {reason}")]
    InvalidSettings { reason: String },

    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Creates a new encode failed error.
    pub fn encode_failed(reason: impl Into<String>) -> Self {
        Self::EncodeFailed {
            reason: reason.into(),
        }
    }

    /// Creates a new invalid settings error.
    pub fn invalid_settings(reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            reason: reason.into(),
        }
    }

    /// Whether this error stops every conversion, not just the current file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CodecUnavailable { .. } | Self::InvalidSettings { .. })
    }
}
