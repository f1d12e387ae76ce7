//! Record materialization under a bounded cap.
//!
//! The sink pulls statements from the scanner, splits each values blob into
//! tuples, coerces every tuple into a typed row, and tags it with its table
//! and source database. A single cap bounds the total record count per
//! extraction call, shared across all tables; once reached, no further
//! statements are pulled.

use serde::Serialize;
use tracing::debug;

use crate::dump::scanner::Statement;
use crate::dump::tuple::split_tuples;
use crate::dump::value::{coerce_tuple, Value};

/// Default cap on records returned per extraction call.
pub const DEFAULT_RECORD_CAP: usize = 2000;

/// One extracted row: table name, positional values, source database tag.
///
/// Column meaning is positional only — downstream consumers know, per table,
/// which index holds which semantic column. No schema travels with the
/// record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Table the row was inserted into.
    pub table: String,
    /// Coerced values in tuple order.
    pub data: Vec<Value>,
    /// Logical database the row came from.
    pub database: String,
}

/// Collect records from a statement sequence, stopping at `cap`.
///
/// Result order mirrors statement and tuple order in the source text; no
/// deduplication, no sorting. The returned length never exceeds `cap`, and
/// when the source holds more tuples than `cap` the result is an exact
/// prefix of the full sequence.
pub fn collect_records<I>(database: &str, statements: I, cap: usize) -> Vec<Record>
where
    I: IntoIterator<Item = Statement>,
{
    if cap == 0 {
        return Vec::new();
    }

    let mut records = Vec::new();
    for stmt in statements {
        for tuple in split_tuples(&stmt.values) {
            records.push(Record {
                table: stmt.table.clone(),
                data: coerce_tuple(&tuple),
                database: database.to_string(),
            });
            if records.len() >= cap {
                debug!(cap, table = %stmt.table, "record cap reached, stopping scan");
                return records;
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::scanner::StatementScanner;

    fn collect(sql: &str, cap: usize) -> Vec<Record> {
        collect_records("VCdb", StatementScanner::new(sql), cap)
    }

    #[test]
    fn test_one_record_per_tuple() {
        let recs = collect("INSERT INTO Make VALUES (1,'Toyota'),(2,'Honda');", 100);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].table, "Make");
        assert_eq!(recs[0].database, "VCdb");
        assert_eq!(
            recs[0].data,
            vec![Value::Integer(1), Value::Text("Toyota".to_string())]
        );
        assert_eq!(
            recs[1].data,
            vec![Value::Integer(2), Value::Text("Honda".to_string())]
        );
    }

    #[test]
    fn test_cap_shared_across_statements() {
        let sql = "INSERT INTO Make VALUES (1,'a'),(2,'b');\n\
                   INSERT INTO Model VALUES (3,'c'),(4,'d');";
        let recs = collect(sql, 3);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[2].table, "Model");
        assert_eq!(recs[2].data[0], Value::Integer(3));
    }

    #[test]
    fn test_cap_is_exact_prefix() {
        let sql = "INSERT INTO Make VALUES (1,'a'),(2,'b'),(3,'c');";
        let full = collect(sql, 100);
        let capped = collect(sql, 2);
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[..], full[..2]);
    }

    #[test]
    fn test_smaller_source_than_cap() {
        let recs = collect("INSERT INTO Make VALUES (1,'a');", 2000);
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_zero_cap() {
        let recs = collect("INSERT INTO Make VALUES (1,'a');", 0);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_source_order_preserved() {
        let sql = "INSERT INTO B VALUES (2);\nINSERT INTO A VALUES (1);";
        let recs = collect(sql, 100);
        assert_eq!(recs[0].table, "B");
        assert_eq!(recs[1].table, "A");
    }

    #[test]
    fn test_no_deduplication() {
        let recs = collect("INSERT INTO Make VALUES (1,'a'),(1,'a');", 100);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], recs[1]);
    }

    #[test]
    fn test_record_serializes_with_tags() {
        let recs = collect("INSERT INTO Make VALUES (1,'Toyota');", 10);
        let json = serde_json::to_string(&recs[0]).unwrap();
        assert_eq!(
            json,
            r#"{"table":"Make","data":[1,"Toyota"],"database":"VCdb"}"#
        );
    }
}
