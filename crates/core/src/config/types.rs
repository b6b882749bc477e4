use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::ConverterConfig;
use crate::naming::DEFAULT_FALLBACK_NAME;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Where source images are read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,
    /// Extension (without dot) a file must have to be converted
    #[serde(default = "default_source_extension")]
    pub extension: String,
    /// Match `AVIF` as well as `avif`
    #[serde(default)]
    pub ignore_extension_case: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extension: default_source_extension(),
            ignore_extension_case: false,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("incoming")
}

fn default_source_extension() -> String {
    "avif".to_string()
}

/// Where converted images are written and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_output_extension")]
    pub extension: String,
    /// Base name used when a source name sanitizes to nothing
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
    /// URL path the destination directory is served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            extension: default_output_extension(),
            fallback_name: default_fallback_name(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("frontend/public/uploads")
}

fn default_output_extension() -> String {
    "jpg".to_string()
}

fn default_fallback_name() -> String {
    DEFAULT_FALLBACK_NAME.to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}
