//! Plain-text progress and summary output.

use std::io::{self, Write};

use super::types::RunSummary;
use crate::naming::display_name;

const RULE_WIDTH: usize = 60;

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Writes the heading printed before scanning.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "{}", title)?;
    rule(out)
}

/// Writes the end-of-run summary block.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    format_label: &str,
    public_prefix: &str,
) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "CONVERSION SUMMARY")?;
    rule(out)?;
    writeln!(out, "Total {} files: {}", format_label, summary.discovered)?;
    writeln!(out, "Successfully converted: {}", summary.success_count())?;
    writeln!(out, "Failed: {}", summary.failure_count())?;

    if !summary.converted.is_empty() {
        writeln!(
            out,
            "\nConverted files saved to: {}",
            summary.destination.display()
        )?;
        writeln!(out, "\nFile mapping (for updating podcast data):")?;
        for item in &summary.converted {
            writeln!(out, "  {}", display_name(&item.original))?;
            writeln!(out, "    -> {}", item.web_path(public_prefix))?;
        }
    }

    if !summary.failed.is_empty() {
        writeln!(out, "\nFailed conversions:")?;
        for failure in &summary.failed {
            writeln!(out, "  - {}", failure.original)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{ConversionResult, FailedConversion};
    use std::path::PathBuf;

    fn render(summary: &RunSummary) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, summary, "AVIF", "/uploads").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner() {
        let mut buf = Vec::new();
        write_banner(&mut buf, "Title").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1], "Title");
    }

    #[test]
    fn test_summary_with_successes_and_failures() {
        let mut summary = RunSummary::new(PathBuf::from("/srv/uploads"));
        summary.discovered = 2;
        summary.converted.push(ConversionResult {
            original: "Jane_Doe - YouTube & Website.avif".to_string(),
            new_file: "jane-doe.jpg".to_string(),
            path: PathBuf::from("/srv/uploads/jane-doe.jpg"),
        });
        summary.failed.push(FailedConversion {
            original: "bad.avif".to_string(),
            reason: "decode error".to_string(),
        });

        let text = render(&summary);
        assert!(text.contains("CONVERSION SUMMARY"));
        assert!(text.contains("Total AVIF files: 2\n"));
        assert!(text.contains("Successfully converted: 1\n"));
        assert!(text.contains("Failed: 1\n"));
        assert!(text.contains("Converted files saved to: /srv/uploads"));
        assert!(text.contains("  Jane Doe\n    -> /uploads/jane-doe.jpg\n"));
        assert!(text.contains("Failed conversions:\n  - bad.avif\n"));
        assert!(!text.contains("decode error"));
    }

    #[test]
    fn test_summary_without_results_omits_sections() {
        let summary = RunSummary::new(PathBuf::from("/srv/uploads"));
        let text = render(&summary);
        assert!(text.contains("Total AVIF files: 0"));
        assert!(!text.contains("File mapping"));
        assert!(!text.contains("Failed conversions"));
    }
}
