//! Line-oriented `INSERT` statement scanning.
//!
//! Export dumps are mostly one statement per line, but the export tool wraps
//! long `VALUES` lists across physical lines. [`StatementScanner`] walks the
//! dump text line by line, recognizes `INSERT INTO <table> ... VALUES ...`
//! statements (stitching continuation lines back together), and yields the
//! table name plus the raw multi-tuple values text with the trailing `;`
//! removed.
//!
//! Scanning is best-effort by design: comment lines, DDL, and INSERT lines
//! that do not fit the expected shape are skipped without any side effect,
//! so one malformed statement never sinks the rest of the dump.

/// Statement keyword that opens a row-bearing line.
const INSERT_PREFIX: &str = "INSERT INTO";

/// Keyword separating the table head from the tuple list.
const VALUES_KEYWORD: &str = "VALUES";

/// One recognized `INSERT` statement: target table and raw values text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Table name with surrounding backticks stripped.
    pub table: String,
    /// Everything after the `VALUES` keyword, terminator removed. Holds one
    /// or more `(...)` tuples still in their textual form.
    pub values: String,
}

/// Lazy iterator over the `INSERT` statements of a dump.
///
/// Consumed lines (including continuation lines) are never re-scanned, and
/// the iterator does no work beyond the statements actually pulled — the
/// record sink stops pulling once its cap is reached.
pub struct StatementScanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> StatementScanner<'a> {
    /// Create a scanner over the full dump text.
    pub fn new(sql: &'a str) -> Self {
        Self {
            lines: sql.split('\n').collect(),
            pos: 0,
        }
    }
}

impl Iterator for StatementScanner<'_> {
    type Item = Statement;

    fn next(&mut self) -> Option<Statement> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            self.pos += 1;

            let Some((table, first)) = parse_insert_head(line) else {
                continue;
            };

            let mut values = first.trim().to_string();

            // The export tool wraps long value lists; keep appending lines
            // until the terminator shows up or a new statement begins.
            while !values.ends_with(';') {
                let Some(next) = self.lines.get(self.pos) else {
                    break;
                };
                if next.trim_start().starts_with(INSERT_PREFIX) {
                    break;
                }
                self.pos += 1;
                values.push(' ');
                values.push_str(next.trim());
            }

            if values.ends_with(';') {
                values.pop();
                while values.ends_with(char::is_whitespace) {
                    values.pop();
                }
            }

            if values.is_empty() {
                continue; // nothing after VALUES: malformed, drop it
            }

            return Some(Statement { table, values });
        }
        None
    }
}

/// Parse the head of an `INSERT INTO <table> ... VALUES` line.
///
/// Returns the table name (backticks stripped) and the raw text following
/// the `VALUES` keyword, or `None` when the line is not a recognizable
/// statement head.
fn parse_insert_head(line: &str) -> Option<(String, &str)> {
    let rest = line.trim().strip_prefix(INSERT_PREFIX)?;
    let rest = rest.trim_start();

    let table_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let table = rest[..table_end].trim_matches('`');
    if table.is_empty() {
        return None;
    }

    let after = &rest[table_end..];
    let idx = after.find(VALUES_KEYWORD)?;
    Some((
        table.to_string(),
        &after[idx + VALUES_KEYWORD.len()..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(sql: &str) -> Vec<Statement> {
        StatementScanner::new(sql).collect()
    }

    #[test]
    fn test_single_statement() {
        let stmts = scan("INSERT INTO Make VALUES (1,'Toyota');");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].table, "Make");
        assert_eq!(stmts[0].values, "(1,'Toyota')");
    }

    #[test]
    fn test_backticked_table_name() {
        let stmts = scan("INSERT INTO `Make` VALUES (1,'Toyota');");
        assert_eq!(stmts[0].table, "Make");
    }

    #[test]
    fn test_skips_non_insert_lines() {
        let sql = "-- MySQL dump\n\
                   CREATE TABLE Make (id INT, name VARCHAR(50));\n\
                   \n\
                   INSERT INTO Make VALUES (1,'Toyota');\n\
                   DROP TABLE IF EXISTS Model;\n";
        let stmts = scan(sql);
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].table, "Make");
    }

    #[test]
    fn test_multi_line_continuation() {
        let wrapped = "INSERT INTO Make VALUES (1,'Toyota'),\n(2,'Honda');";
        let single = "INSERT INTO Make VALUES (1,'Toyota'), (2,'Honda');";
        let a = scan(wrapped);
        let b = scan(single);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].values, b[0].values);
    }

    #[test]
    fn test_continuation_stops_at_next_insert() {
        // First statement lost its terminator; the scanner must not swallow
        // the following statement into it.
        let sql = "INSERT INTO Make VALUES (1,'Toyota')\n\
                   INSERT INTO Model VALUES (10,'Corolla');";
        let stmts = scan(sql);
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].table, "Make");
        assert_eq!(stmts[0].values, "(1,'Toyota')");
        assert_eq!(stmts[1].table, "Model");
    }

    #[test]
    fn test_consumed_lines_not_rescanned() {
        let sql = "INSERT INTO Make VALUES (1,'a'),\n(2,'b'),\n(3,'c');\n\
                   INSERT INTO Model VALUES (10,'x');";
        let stmts = scan(sql);
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].values, "(1,'a'), (2,'b'), (3,'c')");
        assert_eq!(stmts[1].table, "Model");
    }

    #[test]
    fn test_malformed_insert_without_values_skipped() {
        let sql = "INSERT INTO Make;\nINSERT INTO Model VALUES (1,'x');";
        let stmts = scan(sql);
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].table, "Model");
    }

    #[test]
    fn test_empty_values_skipped() {
        let stmts = scan("INSERT INTO Make VALUES ;");
        assert!(stmts.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let stmts = scan("INSERT INTO Make VALUES (1,'Toyota');\r\nINSERT INTO Make VALUES (2,'Honda');\r\n");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].values, "(1,'Toyota')");
        assert_eq!(stmts[1].values, "(2,'Honda')");
    }

    #[test]
    fn test_unterminated_final_statement() {
        // EOF before the terminator: the accumulated text is still yielded,
        // downstream tokenization handles whatever is complete.
        let stmts = scan("INSERT INTO Make VALUES (1,'Toyota')");
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].values, "(1,'Toyota')");
    }

    #[test]
    fn test_leading_whitespace() {
        let stmts = scan("   INSERT INTO Make VALUES (1,'x');");
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_lazy_iteration() {
        let sql = "INSERT INTO A VALUES (1);\nINSERT INTO B VALUES (2);";
        let mut scanner = StatementScanner::new(sql);
        let first = scanner.next().unwrap();
        assert_eq!(first.table, "A");
        // Pulling only one statement must be possible.
        drop(scanner);
    }
}
