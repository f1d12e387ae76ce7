//! CLI implementation for the `refx archives` subcommand.
//!
//! Resolver visibility: for each requested database, list the candidate
//! export archives, open the chosen one, and report which `.sql` member the
//! extraction pipeline would parse — including the nested-archive hop —
//! without actually parsing it.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use zip::ZipArchive;

use crate::cli::wprintln;
use crate::dump::archive::{
    entry_names, find_export_archive, first_nested_archive, pick_sql_entry,
};
use crate::dump::database::ReferenceDb;
use crate::RefdbError;

/// Options for the `refx archives` subcommand.
pub struct ArchivesOptions {
    /// Reference drop root directory.
    pub root: String,
    /// Limit to one database (default: all).
    pub database: Option<ReferenceDb>,
    /// Output resolution results as JSON.
    pub json: bool,
}

/// Resolution outcome for one database.
#[derive(Serialize)]
struct Resolution {
    database: &'static str,
    archive: Option<String>,
    /// Nested archive the entry sits in, when the outer ZIP had no `.sql`.
    nested_in: Option<String>,
    entry: Option<String>,
}

/// Report archive resolution for the requested databases.
pub fn execute(opts: &ArchivesOptions, writer: &mut dyn Write) -> Result<(), RefdbError> {
    let root = crate::cli::require_root(&opts.root)?;

    let databases: Vec<ReferenceDb> = match opts.database {
        Some(db) => vec![db],
        None => ReferenceDb::ALL.to_vec(),
    };

    let mut resolutions = Vec::new();
    for db in databases {
        resolutions.push(resolve(root, db)?);
    }

    if opts.json {
        let line = serde_json::to_string_pretty(&resolutions)
            .map_err(|e| RefdbError::Io(format!("Cannot serialize resolutions: {}", e)))?;
        wprintln!(writer, "{}", line)?;
        return Ok(());
    }

    for res in &resolutions {
        match (&res.archive, &res.entry) {
            (Some(archive), Some(entry)) => {
                let via = match &res.nested_in {
                    Some(nested) => format!(" (inside {})", nested),
                    None => String::new(),
                };
                wprintln!(
                    writer,
                    "{:<12} {} -> {}{}",
                    res.database.cyan(),
                    archive,
                    entry.green(),
                    via
                )?;
            }
            (Some(archive), None) => {
                wprintln!(
                    writer,
                    "{:<12} {} -> {}",
                    res.database.cyan(),
                    archive,
                    "no .sql entry".yellow()
                )?;
            }
            _ => {
                wprintln!(
                    writer,
                    "{:<12} {}",
                    res.database.cyan(),
                    "no export archive".yellow()
                )?;
            }
        }
    }
    Ok(())
}

/// Resolve the archive member for one database without reading dump text.
fn resolve(root: &Path, db: ReferenceDb) -> Result<Resolution, RefdbError> {
    let dir = root.join(db.dir_name());
    let Some(path) = find_export_archive(&dir)? else {
        return Ok(Resolution {
            database: db.dir_name(),
            archive: None,
            nested_in: None,
            entry: None,
        });
    };

    let file = std::fs::File::open(&path)
        .map_err(|e| RefdbError::Io(format!("Cannot open {}: {}", path.display(), e)))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| RefdbError::Archive(format!("Cannot read {}: {}", path.display(), e)))?;
    let names = entry_names(&mut archive)?;

    let archive_name = path.display().to_string();

    if let Some(entry) = pick_sql_entry(&names) {
        return Ok(Resolution {
            database: db.dir_name(),
            archive: Some(archive_name),
            nested_in: None,
            entry: Some(entry.to_owned()),
        });
    }

    // Mirror the resolver's one-level nested hop.
    if let Some(nested) = first_nested_archive(&names) {
        let nested = nested.to_owned();
        let mut bytes = Vec::new();
        archive
            .by_name(&nested)
            .map_err(|e| RefdbError::Archive(format!("Cannot open entry {}: {}", nested, e)))?
            .read_to_end(&mut bytes)
            .map_err(|e| RefdbError::Io(format!("Cannot read entry {}: {}", nested, e)))?;
        let mut inner = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| RefdbError::Archive(format!("Cannot read nested {}: {}", nested, e)))?;
        let inner_names = entry_names(&mut inner)?;
        return Ok(Resolution {
            database: db.dir_name(),
            archive: Some(archive_name),
            nested_in: Some(nested),
            entry: pick_sql_entry(&inner_names).map(str::to_owned),
        });
    }

    Ok(Resolution {
        database: db.dir_name(),
        archive: Some(archive_name),
        nested_in: None,
        entry: None,
    })
}
