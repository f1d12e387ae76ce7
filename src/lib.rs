//! Automotive aftermarket reference database extraction toolkit.
//!
//! The `refdb-utils` crate (library name `refdb`) parses the MySQL export
//! dumps that the aftermarket reference databases ship as — `INSERT`
//! statement text inside ZIP archives, sometimes nested one ZIP deep — and
//! turns them into positional, typed records without involving a relational
//! engine.
//!
//! # CLI Reference
//!
//! Install the `refx` binary and use its subcommands to work with reference
//! database drops from the command line.
//!
//! ## Subcommands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`refx extract`](cli::app::Commands::Extract) | Run the extraction pipeline and print records |
//! | [`refx tables`](cli::app::Commands::Tables) | Per-table record counts for one database |
//! | [`refx archives`](cli::app::Commands::Archives) | Show which archive member would be parsed |
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//!
//! # Library API
//!
//! ## Quick example
//!
//! ```no_run
//! use std::path::Path;
//! use refdb::dump::database::{extract_database, ReferenceDb};
//! use refdb::dump::record::DEFAULT_RECORD_CAP;
//!
//! let records = extract_database(
//!     Path::new("/data/reference"),
//!     ReferenceDb::Vcdb,
//!     DEFAULT_RECORD_CAP,
//! );
//! for rec in &records {
//!     println!("{}: {:?}", rec.table, rec.data);
//! }
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dump::archive`] | Locate the MySQL export archive and pull out its `.sql` member |
//! | [`dump::scanner`] | Line-oriented `INSERT INTO ... VALUES ...` statement scanner |
//! | [`dump::tuple`] | Quote- and depth-aware splitting of the multi-tuple values blob |
//! | [`dump::value`] | Field splitting and coercion to typed [`dump::value::Value`]s |
//! | [`dump::record`] | Record materialization under a bounded record cap |
//! | [`dump::database`] | The fixed database set and the per-database entry point |
//! | [`util::fs`] | Marker-and-extension file discovery shared with the CLI |

#[cfg(feature = "cli")]
pub mod cli;
pub mod dump;
pub mod util;

use thiserror::Error;

/// Errors returned by `refdb` operations.
///
/// The per-database extraction entry point never surfaces these to its
/// caller; they are logged and turned into an empty record sequence. They
/// do cross the API boundary from the lower-level archive and discovery
/// functions, and from CLI subcommands.
#[derive(Error, Debug)]
pub enum RefdbError {
    /// An I/O error occurred (directory listing, file open, or read failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// A ZIP archive could not be opened or an entry could not be read.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Dump text could not be interpreted where it had to be.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid argument was supplied (unknown database name, bad option).
    #[error("Invalid argument: {0}")]
    Argument(String),
}
