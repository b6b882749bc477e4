//! Mock transcoder for testing.

use image::error::{DecodingError, ImageFormatHint};
use image::{ImageError, ImageFormat};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::converter::{ConverterError, PixelLayout, TranscodeOutput, Transcoder};

/// Bytes written in place of a real JPEG.
pub const PLACEHOLDER_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

/// A recorded transcode call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTranscode {
    /// Source path passed in.
    pub source: PathBuf,
    /// Destination path passed in.
    pub destination: PathBuf,
    /// Whether the call succeeded.
    pub success: bool,
}

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Track transcode calls for assertions
/// - Fail specific source files by name
/// - Simulate a build without codec support
///
/// Successful calls write a small placeholder file to the destination so that
/// collision resolution behaves as it would with real output.
#[derive(Debug, Clone, Default)]
pub struct MockTranscoder {
    /// Recorded calls.
    calls: Arc<Mutex<Vec<RecordedTranscode>>>,
    /// Source file names that fail to decode.
    failing: Arc<Mutex<HashSet<String>>>,
    /// Whether `validate` reports missing codec support.
    codec_missing: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every source file called `name` fail to decode.
    pub fn fail_on(&self, name: &str) {
        lock(&self.failing).insert(name.to_string());
    }

    /// Make `validate` report that AVIF decoding is unavailable.
    pub fn set_codec_missing(&self, missing: bool) {
        *lock(&self.codec_missing) = missing;
    }

    /// All calls made so far, in order.
    pub fn recorded_transcodes(&self) -> Vec<RecordedTranscode> {
        lock(&self.calls).clone()
    }

    fn should_fail(&self, source: &Path) -> bool {
        source
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| lock(&self.failing).contains(n))
    }

    fn record(&self, source: &Path, destination: &Path, success: bool) {
        lock(&self.calls).push(RecordedTranscode {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            success,
        });
    }
}

impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    fn validate(&self) -> Result<(), ConverterError> {
        if *lock(&self.codec_missing) {
            return Err(ConverterError::CodecUnavailable {
                format: "AVIF".to_string(),
                hint: "mock codec disabled".to_string(),
            });
        }
        Ok(())
    }

    fn transcode(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<TranscodeOutput, ConverterError> {
        if self.should_fail(source) {
            self.record(source, destination, false);
            return Err(ConverterError::DecodeFailed {
                path: source.to_path_buf(),
                source: ImageError::Decoding(DecodingError::new(
                    ImageFormatHint::Exact(ImageFormat::Avif),
                    "mock decode failure",
                )),
            });
        }

        if let Err(e) = fs::write(destination, PLACEHOLDER_JPEG) {
            self.record(source, destination, false);
            return Err(ConverterError::WriteFailed {
                path: destination.to_path_buf(),
                source: e,
            });
        }

        self.record(source, destination, true);
        Ok(TranscodeOutput {
            width: 1,
            height: 1,
            source_layout: PixelLayout::Rgb,
            bytes_written: PLACEHOLDER_JPEG.len() as u64,
            duration_ms: 0,
        })
    }
}
