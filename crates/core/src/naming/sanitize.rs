//! Filename sanitizer.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

/// Base name used when sanitizing leaves nothing behind.
pub const DEFAULT_FALLBACK_NAME: &str = "unknown-guest";

/// Trailing channel branding appended by the thumbnail export.
static BRANDING_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*-\s*YouTube\s*&\s*Website.*$").unwrap());

/// Trailing duplicate marker such as ` (1)`.
static COPY_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\d+\)$").unwrap());

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-]").unwrap());

static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Returns the file name without its final extension.
fn strip_extension(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}

/// Converts a source filename into a clean, web-safe base name.
///
/// The result only contains `[a-z0-9]` and single hyphens, never starts or
/// ends with a hyphen, and may be empty.
pub fn sanitize(name: &str) -> String {
    let stem = strip_extension(name);

    let stem = BRANDING_SUFFIX.replace(stem, "");
    let stem = COPY_SUFFIX.replace(&stem, "");

    let spaced = stem.replace('_', " ");
    let hyphenated = spaced.trim().to_lowercase().replace(' ', "-");

    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");

    collapsed.trim_matches('-').to_string()
}

/// Sanitizes `name`, substituting `fallback` when nothing usable remains.
pub fn base_name_or_fallback(name: &str, fallback: &str) -> String {
    let base = sanitize(name);
    if base.is_empty() {
        fallback.to_string()
    } else {
        base
    }
}

/// Human-readable guest name for the run report.
///
/// Keeps the original casing and punctuation, but drops the extension and
/// the channel branding and turns underscores into spaces.
pub fn display_name(original: &str) -> String {
    let spaced = strip_extension(original).replace('_', " ");
    BRANDING_SUFFIX.replace(&spaced, "").trim().to_string()
}
