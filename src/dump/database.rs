//! The reference database set and the per-database extraction entry point.
//!
//! Five third-party databases make up a reference drop: vehicle
//! configuration (VCdb), parts classification (PCdb), part attributes
//! (PAdb), qualifiers (Qdb), and the brand table. Each lives in its own
//! directory under the reference root and ships as a MySQL export archive.
//!
//! [`extract_database`] runs the whole pipeline for one database and never
//! fails: every problem along the way — missing directory, corrupt archive,
//! unreadable entry — is logged and produces an empty record sequence.
//! Callers that need to distinguish "legitimately empty" from "failed to
//! read" must use the lower-level [`archive`](crate::dump::archive)
//! functions directly.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::dump::archive::load_dump;
use crate::dump::record::{collect_records, Record};
use crate::dump::scanner::StatementScanner;
use crate::RefdbError;

/// One of the fixed set of reference databases in a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReferenceDb {
    /// Vehicle configuration database.
    Vcdb,
    /// Parts classification database.
    Pcdb,
    /// Part attributes database.
    Padb,
    /// Qualifiers database.
    Qdb,
    /// Brand identifier table.
    BrandTable,
}

impl ReferenceDb {
    /// Every database a drop can contain, in conventional order.
    pub const ALL: [ReferenceDb; 5] = [
        ReferenceDb::Vcdb,
        ReferenceDb::Pcdb,
        ReferenceDb::Padb,
        ReferenceDb::Qdb,
        ReferenceDb::BrandTable,
    ];

    /// Directory name of this database under the reference root. Also used
    /// as the `database` tag on extracted records.
    pub fn dir_name(self) -> &'static str {
        match self {
            ReferenceDb::Vcdb => "VCdb",
            ReferenceDb::Pcdb => "PCdb",
            ReferenceDb::Padb => "PAdb",
            ReferenceDb::Qdb => "Qdb",
            ReferenceDb::BrandTable => "BrandTable",
        }
    }
}

impl fmt::Display for ReferenceDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ReferenceDb {
    type Err = RefdbError;

    fn from_str(s: &str) -> Result<Self, RefdbError> {
        ReferenceDb::ALL
            .into_iter()
            .find(|db| db.dir_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                RefdbError::Argument(format!(
                    "Unknown database '{}'. Use VCdb, PCdb, PAdb, Qdb, or BrandTable.",
                    s
                ))
            })
    }
}

/// Extract all records for one database, bounded by `cap`.
///
/// Re-opens and re-parses the archive on every call; no state is shared
/// between calls, so repeated extraction of an unchanged drop yields an
/// identical sequence. Errors are logged, never propagated — the contract
/// is "always returns a (possibly empty) sequence".
pub fn extract_database(root: &Path, db: ReferenceDb, cap: usize) -> Vec<Record> {
    match try_extract(root, db, cap) {
        Ok(records) => {
            info!(database = %db, records = records.len(), "extraction complete");
            records
        }
        Err(e) => {
            warn!(database = %db, error = %e, "extraction failed, returning no records");
            Vec::new()
        }
    }
}

fn try_extract(root: &Path, db: ReferenceDb, cap: usize) -> Result<Vec<Record>, RefdbError> {
    let Some(sql) = load_dump(root, db.dir_name())? else {
        return Ok(Vec::new());
    };
    let scanner = StatementScanner::new(&sql);
    Ok(collect_records(db.dir_name(), scanner, cap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names() {
        assert_eq!(ReferenceDb::Vcdb.dir_name(), "VCdb");
        assert_eq!(ReferenceDb::BrandTable.dir_name(), "BrandTable");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("vcdb".parse::<ReferenceDb>().unwrap(), ReferenceDb::Vcdb);
        assert_eq!("PADB".parse::<ReferenceDb>().unwrap(), ReferenceDb::Padb);
        assert_eq!(
            "brandtable".parse::<ReferenceDb>().unwrap(),
            ReferenceDb::BrandTable
        );
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("NotADb".parse::<ReferenceDb>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for db in ReferenceDb::ALL {
            assert_eq!(db.to_string().parse::<ReferenceDb>().unwrap(), db);
        }
    }

    #[test]
    fn test_extract_missing_root_returns_empty() {
        let recs = extract_database(
            Path::new("/nonexistent/reference/root"),
            ReferenceDb::Vcdb,
            100,
        );
        assert!(recs.is_empty());
    }
}
