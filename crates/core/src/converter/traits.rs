//! Trait definitions for the converter module.

use std::path::Path;

use super::error::ConverterError;
use super::types::TranscodeOutput;

/// A converter that turns one source image into one JPEG file.
pub trait Transcoder {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Validates that the transcoder can run in this build and configuration.
    fn validate(&self) -> Result<(), ConverterError>;

    /// Converts `source` and writes the JPEG to `destination`.
    ///
    /// The destination's parent directory must already exist. Nothing is
    /// written when an error is returned.
    fn transcode(&self, source: &Path, destination: &Path)
        -> Result<TranscodeOutput, ConverterError>;
}
