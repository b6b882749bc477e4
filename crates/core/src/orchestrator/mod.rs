//! Run orchestrator for batch conversion.
//!
//! A run moves through three phases:
//! - **Scanning**: list matching source files (destination directory is created first)
//! - **Processing**: sanitize, resolve a free destination and transcode each file in turn
//! - **Reporting**: print counts, the file mapping and the failures
//!
//! Per-file failures are recorded and never stop the run.

mod report;
mod runner;
mod types;

pub use report::{write_banner, write_summary};
pub use runner::Orchestrator;
pub use types::{
    ConversionResult, FailedConversion, FileOutcome, RunError, RunState, RunSummary, SourceFile,
};
