//! Codec capability detection.

use serde::{Deserialize, Serialize};

use super::error::ConverterError;

const AVIF_HINT: &str = "this build cannot decode AVIF images; install libdav1d \
     (e.g. `apt install libdav1d-dev` or `brew install dav1d`) and rebuild with \
     `cargo build --release --features avif-native`";

/// Codecs compiled into this build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCapabilities {
    /// AVIF decoding available
    pub avif_decode: bool,
}

impl CodecCapabilities {
    /// Detect which codecs this build can decode.
    ///
    /// `image` only decodes AVIF through dav1d (`avif-native`). Its plain
    /// `avif` feature is the encoder, and `ImageFormat::Avif.reading_enabled()`
    /// reports that one, so it cannot be used here.
    pub fn detect() -> Self {
        Self {
            avif_decode: cfg!(feature = "avif-native"),
        }
    }

    /// Fails with an operator-facing diagnostic when AVIF cannot be decoded.
    pub fn ensure_avif_supported(&self) -> Result<(), ConverterError> {
        if self.avif_decode {
            Ok(())
        } else {
            Err(ConverterError::CodecUnavailable {
                format: "AVIF".to_string(),
                hint: AVIF_HINT.to_string(),
            })
        }
    }
}
