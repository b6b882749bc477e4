//! Placer module for choosing where converted files land.
//!
//! Converted files are written into a single destination directory. Names are
//! never reused: when `jane-doe.jpg` is taken the next conversion of the same
//! guest becomes `jane-doe-1.jpg`, then `jane-doe-2.jpg`, and so on. Existing
//! files, including ones written earlier in the same run, are never
//! overwritten.
//!
//! # Example
//!
//! ```ignore
//! use avif2jpg_core::placer::{ensure_directory, resolve_destination};
//!
//! ensure_directory(Path::new("public/uploads"))?;
//! let path = resolve_destination("jane-doe", "jpg", Path::new("public/uploads"));
//! ```
//!
//! Resolution is check-then-write with no reservation, so it assumes a single
//! writer per destination directory.

mod error;
mod resolver;

pub use error::PlacerError;
pub use resolver::{ensure_directory, entry_exists, resolve_destination};
