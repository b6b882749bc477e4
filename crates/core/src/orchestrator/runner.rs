//! Run orchestrator implementation.
//!
//! Drives one run through its three phases:
//! - Scanning: list matching files in the source directory
//! - Processing: sanitize, place and transcode each file, one at a time
//! - Reporting: print the summary
//!
//! Files are handled strictly in sequence so that collision resolution sees
//! every file written earlier in the same run.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::converter::Transcoder;
use crate::naming::base_name_or_fallback;
use crate::placer::{ensure_directory, resolve_destination};

use super::report::{write_banner, write_summary};
use super::types::{
    ConversionResult, FailedConversion, FileOutcome, RunError, RunState, RunSummary, SourceFile,
};

const TITLE: &str = "AVIF to JPG Converter for Upcoming Podcast Images";

/// The run orchestrator - converts every matching file in the source directory.
pub struct Orchestrator<T: Transcoder> {
    config: Config,
    transcoder: T,
    destination: PathBuf,
    state: RunState,
}

impl<T: Transcoder> Orchestrator<T> {
    /// Creates an orchestrator for one run.
    pub fn new(config: Config, transcoder: T) -> Self {
        let destination = std::path::absolute(&config.output.dir)
            .unwrap_or_else(|_| config.output.dir.clone());

        Self {
            config,
            transcoder,
            destination,
            state: RunState::Scanning,
        }
    }

    /// Current phase of the run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Absolute destination directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Configuration this run was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn transition(&mut self, next: RunState) {
        debug!("Run state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn matches_extension(&self, name: &str) -> bool {
        let wanted = &self.config.source.extension;
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if self.config.source.ignore_extension_case => {
                ext.eq_ignore_ascii_case(wanted)
            }
            Some(ext) => ext == wanted,
            None => false,
        }
    }

    /// Lists the source files to convert, in directory-listing order.
    ///
    /// A missing source directory is treated as empty.
    pub fn scan(&self) -> Result<Vec<SourceFile>, RunError> {
        let dir = &self.config.source.dir;
        let scan_failed = |e: io::Error| RunError::ScanFailed {
            path: dir.clone(),
            source: e,
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Source directory {:?} does not exist", dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(scan_failed(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(scan_failed)?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name.starts_with('.') || !self.matches_extension(&name) {
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                debug!("Skipping non-file entry {:?}", path);
                continue;
            }

            files.push(SourceFile { name, path });
        }

        Ok(files)
    }

    /// Converts one file, printing its progress lines to `out`.
    ///
    /// Transcoding failures are captured in the returned outcome; only
    /// output errors are returned as `Err`.
    pub fn process_file<W: Write>(
        &self,
        file: &SourceFile,
        out: &mut W,
    ) -> Result<FileOutcome, RunError> {
        let base = base_name_or_fallback(&file.name, &self.config.output.fallback_name);
        let path = resolve_destination(&base, &self.config.output.extension, &self.destination);
        let new_file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", base, self.config.output.extension));

        writeln!(out, "\nConverting: {}", file.name)?;
        writeln!(out, "  -> {}", new_file)?;

        match self.transcoder.transcode(&file.path, &path) {
            Ok(output) => {
                debug!(
                    "Converted {:?} -> {:?} ({}x{}, {} bytes, {} ms)",
                    file.path,
                    path,
                    output.width,
                    output.height,
                    output.bytes_written,
                    output.duration_ms
                );
                writeln!(out, "  [OK] Success")?;
                Ok(FileOutcome::Converted(ConversionResult {
                    original: file.name.clone(),
                    new_file,
                    path,
                }))
            }
            Err(e) => {
                error!(source = ?file.path, "Error converting {:?}: {}", file.path, e);
                writeln!(out, "  [FAIL] Error")?;
                Ok(FileOutcome::Failed(FailedConversion {
                    original: file.name.clone(),
                    reason: e.to_string(),
                }))
            }
        }
    }

    /// Runs all three phases, writing progress and the summary to `out`.
    pub fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, RunError> {
        self.state = RunState::Scanning;
        ensure_directory(&self.destination)?;

        write_banner(out, TITLE)?;

        let files = self.scan()?;
        let label = self.config.source.extension.to_uppercase();
        info!(
            "Found {} {} files in {:?}",
            files.len(),
            label,
            self.config.source.dir
        );
        writeln!(out, "\nFound {} {} files in source directory", files.len(), label)?;

        self.transition(RunState::Processing);
        let mut summary = RunSummary::new(self.destination.clone());
        summary.discovered = files.len();

        for file in &files {
            let outcome = self.process_file(file, out)?;
            summary.record(outcome);
        }

        self.transition(RunState::Reporting);
        info!(
            "Run complete: {} converted, {} failed",
            summary.success_count(),
            summary.failure_count()
        );
        write_summary(out, &summary, &label, &self.config.output.public_prefix)?;
        out.flush()?;

        Ok(summary)
    }

    /// Runs with progress and summary printed to stdout.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }
}
