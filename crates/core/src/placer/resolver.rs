//! Destination directory preparation and collision-free naming.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::PlacerError;

/// Creates `dir` and any missing parents.
pub fn ensure_directory(dir: &Path) -> Result<(), PlacerError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PlacerError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| PlacerError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;
    debug!("Created destination directory {:?}", dir);

    Ok(())
}

/// Whether any filesystem entry occupies `path`, dangling symlinks included.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Returns the first unused `base.ext`, `base-1.ext`, `base-2.ext`, ... in `dest_dir`.
///
/// The returned path did not exist at the moment it was checked. The counter
/// has no upper bound.
pub fn resolve_destination(base_name: &str, extension: &str, dest_dir: &Path) -> PathBuf {
    let mut candidate = dest_dir.join(format!("{}.{}", base_name, extension));
    let mut counter: u64 = 1;

    while entry_exists(&candidate) {
        candidate = dest_dir.join(format!("{}-{}.{}", base_name, counter, extension));
        counter += 1;
    }

    candidate
}
