//! CLI implementation for the `refx tables` subcommand.
//!
//! Extracts one database and prints how many records each table produced —
//! a quick way to see what a drop actually contains (and whether the cap
//! truncated it).

use std::collections::BTreeMap;
use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::wprintln;
use crate::dump::database::{extract_database, ReferenceDb};
use crate::RefdbError;

/// Options for the `refx tables` subcommand.
pub struct TablesOptions {
    /// Reference drop root directory.
    pub root: String,
    /// Database to inspect.
    pub database: ReferenceDb,
    /// Cap on the number of records extracted.
    pub cap: usize,
    /// Output counts as JSON.
    pub json: bool,
}

#[derive(Serialize)]
struct TableCounts<'a> {
    database: &'a str,
    total: usize,
    tables: BTreeMap<String, usize>,
}

/// Print per-table record counts for one database.
pub fn execute(opts: &TablesOptions, writer: &mut dyn Write) -> Result<(), RefdbError> {
    let root = crate::cli::require_root(&opts.root)?;

    let records = extract_database(root, opts.database, opts.cap);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for rec in &records {
        *counts.entry(rec.table.clone()).or_insert(0) += 1;
    }

    if opts.json {
        let summary = TableCounts {
            database: opts.database.dir_name(),
            total: records.len(),
            tables: counts,
        };
        let line = serde_json::to_string_pretty(&summary)
            .map_err(|e| RefdbError::Io(format!("Cannot serialize summary: {}", e)))?;
        wprintln!(writer, "{}", line)?;
        return Ok(());
    }

    let width = counts.keys().map(String::len).max().unwrap_or(0);
    for (table, count) in &counts {
        wprintln!(writer, "{}  {}", format!("{:<width$}", table).cyan(), count)?;
    }
    wprintln!(writer)?;
    wprintln!(
        writer,
        "{} tables, {} records from {}",
        counts.len(),
        records.len(),
        opts.database
    )?;
    Ok(())
}
