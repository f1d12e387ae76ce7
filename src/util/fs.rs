//! Filesystem helpers for reference drop discovery.
//!
//! Provides [`find_marked_files`] to list the files in a database drop
//! directory that carry a vendor marker in their name and a given extension.
//! Used by the archive resolver and the `archives` subcommand.

use std::path::{Path, PathBuf};

use crate::RefdbError;

/// Find files in `dir` whose name contains `marker` and ends with `extension`.
///
/// The search is not recursive: reference drops place their export archives
/// directly inside the per-database directory. The extension comparison is
/// case-insensitive, the marker comparison is not (the vendor spells it one
/// way). Results are sorted by path so repeated listings are deterministic.
pub fn find_marked_files(
    dir: &Path,
    marker: &str,
    extension: &str,
) -> Result<Vec<PathBuf>, RefdbError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| RefdbError::Io(format!("Cannot read directory {}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| RefdbError::Io(format!("Cannot read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.contains(marker) && has_extension(&path, extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
