//! CLI implementation for the `refx extract` subcommand.
//!
//! Runs the full pipeline for one database and prints every record, either
//! as an aligned text listing or as JSON (one object per line, suitable for
//! piping into `jq`).

use std::io::Write;

use colored::Colorize;

use crate::cli::wprintln;
use crate::dump::database::{extract_database, ReferenceDb};
use crate::dump::record::Record;
use crate::dump::value::Value;
use crate::RefdbError;

/// Options for the `refx extract` subcommand.
pub struct ExtractOptions {
    /// Reference drop root directory.
    pub root: String,
    /// Database to extract.
    pub database: ReferenceDb,
    /// Only print records from this table.
    pub table: Option<String>,
    /// Cap on the number of records extracted.
    pub cap: usize,
    /// Output records as JSON, one object per line.
    pub json: bool,
}

/// Extract one database and print its records.
pub fn execute(opts: &ExtractOptions, writer: &mut dyn Write) -> Result<(), RefdbError> {
    let root = crate::cli::require_root(&opts.root)?;

    let records = extract_database(root, opts.database, opts.cap);
    let selected: Vec<&Record> = records
        .iter()
        .filter(|r| opts.table.as_ref().is_none_or(|t| r.table == *t))
        .collect();

    if opts.json {
        for rec in &selected {
            let line = serde_json::to_string(rec)
                .map_err(|e| RefdbError::Io(format!("Cannot serialize record: {}", e)))?;
            wprintln!(writer, "{}", line)?;
        }
        return Ok(());
    }

    for rec in &selected {
        wprintln!(writer, "{}  {}", rec.table.cyan(), render_row(&rec.data))?;
    }
    wprintln!(writer)?;
    wprintln!(
        writer,
        "{} records from {}",
        selected.len(),
        opts.database
    )?;
    Ok(())
}

fn render_row(data: &[Value]) -> String {
    data.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}
