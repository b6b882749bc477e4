//! Filename handling for converted uploads.
//!
//! Source files arrive with whatever names the export tool gave them, e.g.
//! `Jane Doe - YouTube & Website (1).avif`. This module turns those into
//! URL-safe base names (`jane-doe`) and into the human-readable names used in
//! the run report.

mod sanitize;

pub use sanitize::{base_name_or_fallback, display_name, sanitize, DEFAULT_FALLBACK_NAME};
