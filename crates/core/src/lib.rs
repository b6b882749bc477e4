pub mod config;
pub mod converter;
pub mod naming;
pub mod orchestrator;
pub mod placer;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config, ConfigError,
    OutputConfig, SourceConfig,
};
pub use converter::{
    CodecCapabilities, ConverterConfig, ConverterError, ImageTranscoder, Transcoder,
};
pub use naming::sanitize;
pub use orchestrator::{
    ConversionResult, FailedConversion, FileOutcome, Orchestrator, RunError, RunState, RunSummary,
    SourceFile,
};
pub use placer::{resolve_destination, PlacerError};
