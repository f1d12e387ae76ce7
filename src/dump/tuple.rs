//! Tuple splitting for multi-row `VALUES` text.
//!
//! An `INSERT` statement carries `(v1,v2,...),(v1,v2,...),...` — one
//! parenthesized group per row. [`split_tuples`] walks that text once, left
//! to right, tracking quote state and parenthesis depth so commas, parens,
//! and quote characters *inside* string literals never break a group.
//!
//! The splitter is total: malformed input yields fewer (or zero) groups,
//! never a panic.

/// Split a raw values blob into individual `(...)` tuple strings.
///
/// Quote regions open on `'` or `"` and close only on the same character;
/// a doubled quote character inside an open region is an escaped literal
/// and keeps the region open. Parenthesis depth only counts outside quote
/// regions, and a tuple is emitted when depth returns to zero. Trailing
/// text that never balances is discarded, and every emitted tuple is
/// required to literally start with `(` and end with `)`.
pub fn split_tuples(blob: &str) -> Vec<String> {
    let mut tuples = Vec::new();
    let mut acc = String::new();
    let mut depth: u32 = 0;
    let mut quote: Option<char> = None;
    let mut chars = blob.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            acc.push(ch);
            if ch == q {
                if chars.next_if_eq(&q).is_some() {
                    acc.push(q); // escaped literal quote, region stays open
                } else {
                    quote = None;
                }
            }
            continue;
        }

        match ch {
            '\'' | '"' if depth > 0 => {
                quote = Some(ch);
                acc.push(ch);
            }
            '(' => {
                depth += 1;
                acc.push(ch);
            }
            ')' if depth > 0 => {
                depth -= 1;
                acc.push(ch);
                if depth == 0 {
                    let tuple = std::mem::take(&mut acc);
                    if tuple.starts_with('(') && tuple.ends_with(')') {
                        tuples.push(tuple);
                    }
                }
            }
            _ if depth > 0 => acc.push(ch),
            _ => {} // separators and stray characters between tuples
        }
    }

    tuples
}
