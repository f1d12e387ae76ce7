//! Export archive resolution.
//!
//! Reference database drops place a vendor export archive (a file whose name
//! carries the `MySQL` marker, ending in `.zip`) inside a per-database
//! directory. The archive either contains `.sql` dump entries directly or
//! holds a single nested `.zip` that contains them — the vendor has shipped
//! both layouts. [`load_dump`] resolves either shape and returns the dump
//! text, fully read into memory.
//!
//! Absence at any step (missing directory, no marked archive, no `.sql`
//! entry at either level) is a legitimate `None` outcome rather than an
//! error: drops routinely omit databases a subscriber has not licensed.

use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;

use crate::util::fs::find_marked_files;
use crate::RefdbError;

/// Marker the vendor puts in the name of its MySQL export archives.
pub const EXPORT_MARKER: &str = "MySQL";

/// Extension of the export archives (and of nested archives inside them).
pub const ARCHIVE_EXTENSION: &str = "zip";

/// How many nested-archive levels to descend. The vendor nests at most once.
const MAX_NESTING: u8 = 1;

/// Locate the export archive for one database directory.
///
/// Lists `dir` and picks the first file (in sorted order) whose name
/// contains [`EXPORT_MARKER`] and ends in [`ARCHIVE_EXTENSION`]. Returns
/// `Ok(None)` when the directory is missing or holds no matching file.
pub fn find_export_archive(dir: &Path) -> Result<Option<PathBuf>, RefdbError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "database directory does not exist");
        return Ok(None);
    }

    let archives = find_marked_files(dir, EXPORT_MARKER, ARCHIVE_EXTENSION)?;
    debug!(dir = %dir.display(), candidates = archives.len(), "listed export archives");
    Ok(archives.into_iter().next())
}

/// Read the SQL dump text for one database under the reference root.
///
/// Resolves `<root>/<dir_name>`, finds the export archive, and extracts the
/// preferred `.sql` entry, descending into the first nested archive if the
/// outer one carries no `.sql` entry of its own. `Ok(None)` means no dump
/// was found anywhere along that path.
pub fn load_dump(root: &Path, dir_name: &str) -> Result<Option<String>, RefdbError> {
    let dir = root.join(dir_name);
    let Some(path) = find_export_archive(&dir)? else {
        info!(database = dir_name, "no export archive found");
        return Ok(None);
    };

    info!(database = dir_name, archive = %path.display(), "opening export archive");
    let file = std::fs::File::open(&path)
        .map_err(|e| RefdbError::Io(format!("Cannot open {}: {}", path.display(), e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| RefdbError::Archive(format!("Cannot read {}: {}", path.display(), e)))?;

    read_sql_from_zip(&mut archive, MAX_NESTING)
}

/// List entry names of an open archive in central-directory order.
///
/// The order matters: "first nested archive" and "first `.sql` entry" are
/// defined against it, and extraction must be deterministic across calls.
pub fn entry_names<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Vec<String>, RefdbError> {
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| RefdbError::Archive(format!("Cannot read entry {}: {}", i, e)))?;
        names.push(entry.name().to_owned());
    }
    Ok(names)
}

/// Choose the `.sql` entry to parse from a list of archive entry names.
///
/// Entries whose name contains `data` (case-insensitive) win over the first
/// `.sql` entry found, biasing toward the data-bearing dump when a
/// schema-only dump sits alongside it.
pub fn pick_sql_entry(names: &[String]) -> Option<&str> {
    let sql: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| n.to_ascii_lowercase().ends_with(".sql"))
        .collect();

    sql.iter()
        .find(|n| n.to_ascii_lowercase().contains("data"))
        .or_else(|| sql.first())
        .copied()
}

/// First entry that is itself an archive, if any.
pub fn first_nested_archive(names: &[String]) -> Option<&str> {
    let suffix = format!(".{}", ARCHIVE_EXTENSION);
    names
        .iter()
        .map(String::as_str)
        .find(|n| n.to_ascii_lowercase().ends_with(&suffix))
}

/// Extract the preferred `.sql` entry from an open archive, descending up to
/// `nesting` levels into the first nested archive when none is found.
fn read_sql_from_zip<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    nesting: u8,
) -> Result<Option<String>, RefdbError> {
    let names = entry_names(archive)?;
    debug!(entries = ?names, "archive entries");

    if let Some(entry) = pick_sql_entry(&names) {
        let entry = entry.to_owned();
        info!(entry = %entry, "reading SQL dump entry");
        let mut file = archive
            .by_name(&entry)
            .map_err(|e| RefdbError::Archive(format!("Cannot open entry {}: {}", entry, e)))?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| RefdbError::Io(format!("Cannot read entry {}: {}", entry, e)))?;
        return Ok(Some(text));
    }

    if nesting == 0 {
        return Ok(None);
    }

    let Some(nested) = first_nested_archive(&names) else {
        return Ok(None);
    };
    let nested = nested.to_owned();
    debug!(nested = %nested, "no top-level .sql entry, descending into nested archive");

    let mut bytes = Vec::new();
    archive
        .by_name(&nested)
        .map_err(|e| RefdbError::Archive(format!("Cannot open entry {}: {}", nested, e)))?
        .read_to_end(&mut bytes)
        .map_err(|e| RefdbError::Io(format!("Cannot read entry {}: {}", nested, e)))?;

    let mut inner = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| RefdbError::Archive(format!("Cannot read nested {}: {}", nested, e)))?;
    read_sql_from_zip(&mut inner, nesting - 1)
}
