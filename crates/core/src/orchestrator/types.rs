//! Types for the run orchestrator.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::placer::PlacerError;

/// Errors that stop a run before it reaches the report.
#[derive(Debug, Error)]
pub enum RunError {
    /// Destination directory could not be prepared.
    #[error("destination error: {0}")]
    Destination(#[from] PlacerError),

    /// Source directory could not be listed.
    #[error("failed to list source directory {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Progress or report output could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Phase of a run. Runs move strictly forward and end in `Reporting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Listing the source directory.
    #[default]
    Scanning,
    /// Converting discovered files one at a time.
    Processing,
    /// Printing the summary.
    Reporting,
}

/// A source image discovered during scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File name as listed, e.g. `Jane Doe - YouTube & Website.avif`.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// A successfully converted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Original source file name.
    pub original: String,
    /// File name written in the destination directory.
    pub new_file: String,
    /// Absolute path of the written file.
    pub path: PathBuf,
}

impl ConversionResult {
    /// URL path of the file when the destination is served under `prefix`.
    pub fn web_path(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.new_file)
    }
}

/// A source file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedConversion {
    /// Original source file name.
    pub original: String,
    /// Error message from the transcoder.
    pub reason: String,
}

/// Outcome of processing one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted(ConversionResult),
    Failed(FailedConversion),
}

impl FileOutcome {
    /// Whether the file was converted.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    /// Original source file name.
    pub fn original(&self) -> &str {
        match self {
            Self::Converted(result) => &result.original,
            Self::Failed(failure) => &failure.original,
        }
    }
}

/// In-memory summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of source files found.
    pub discovered: usize,
    /// Successful conversions, in processing order.
    pub converted: Vec<ConversionResult>,
    /// Failed conversions, in processing order.
    pub failed: Vec<FailedConversion>,
    /// Directory the files were written to.
    pub destination: PathBuf,
}

impl RunSummary {
    /// Creates an empty summary for a run writing into `destination`.
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            ..Default::default()
        }
    }

    /// Adds a per-file outcome.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted(result) => self.converted.push(result),
            FileOutcome::Failed(failure) => self.failed.push(failure),
        }
    }

    /// Number of files converted.
    pub fn success_count(&self) -> usize {
        self.converted.len()
    }

    /// Number of files that failed.
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Consumes the summary, keeping only the successful conversions.
    pub fn into_converted(self) -> Vec<ConversionResult> {
        self.converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(original: &str, new_file: &str) -> FileOutcome {
        FileOutcome::Converted(ConversionResult {
            original: original.to_string(),
            new_file: new_file.to_string(),
            path: PathBuf::from("/srv/uploads").join(new_file),
        })
    }

    #[test]
    fn test_web_path() {
        let FileOutcome::Converted(result) = converted("A.avif", "a.jpg") else {
            unreachable!()
        };
        assert_eq!(result.web_path("/uploads"), "/uploads/a.jpg");
        assert_eq!(result.web_path("/uploads/"), "/uploads/a.jpg");
        assert_eq!(result.web_path(""), "/a.jpg");
    }

    #[test]
    fn test_summary_records_outcomes_in_order() {
        let mut summary = RunSummary::new(PathBuf::from("/srv/uploads"));
        summary.discovered = 3;
        summary.record(converted("A.avif", "a.jpg"));
        summary.record(FileOutcome::Failed(FailedConversion {
            original: "bad.avif".to_string(),
            reason: "corrupt".to_string(),
        }));
        summary.record(converted("B.avif", "b.jpg"));

        assert_eq!(summary.success_count(), 2);
        assert_eq!(summary.failure_count(), 1);
        assert_eq!(summary.failed[0].original, "bad.avif");

        let names: Vec<_> = summary
            .into_converted()
            .into_iter()
            .map(|r| r.new_file)
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = converted("A.avif", "a.jpg");
        assert!(ok.is_success());
        assert_eq!(ok.original(), "A.avif");

        let failed = FileOutcome::Failed(FailedConversion {
            original: "bad.avif".to_string(),
            reason: "corrupt".to_string(),
        });
        assert!(!failed.is_success());
        assert_eq!(failed.original(), "bad.avif");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(converted("A.avif", "a.jpg")).unwrap();
        assert_eq!(json["status"], "converted");
        assert_eq!(json["new_file"], "a.jpg");
    }
}
