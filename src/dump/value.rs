//! Field splitting and value coercion.
//!
//! One tuple string (`(v1,v2,...)`) becomes an ordered list of typed
//! [`Value`]s: the outer parens come off, the fields are comma-split with
//! the same quote-aware state machine the tuple splitter uses (doubled
//! quotes are unescaped during this pass), and each raw field is classified
//! by the dump's textual grammar:
//!
//! | Token | Value |
//! |-------|-------|
//! | `NULL` (case-insensitive) | [`Value::Null`] |
//! | `[0-9]+` | [`Value::Integer`] |
//! | `[0-9]+.[0-9]+` | [`Value::Float`] |
//! | matching `'...'` or `"..."` | [`Value::Text`] (one quote layer stripped) |
//! | anything else | [`Value::Text`] verbatim |
//!
//! Coercion never fails: tokens that look numeric but do not parse fall
//! through to `Text`.

use std::fmt;

use serde::Serialize;

/// Typed value coerced from one dump field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Digit-only token, parsed as 64-bit signed.
    Integer(i64),
    /// `digits.digits` token, parsed as double precision.
    Float(f64),
    /// Everything else, with one layer of matching quotes removed if present.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Split a tuple string into its raw comma-separated fields.
///
/// Strips the outer `(`/`)` pair, then walks the interior with quote-state
/// tracking: commas inside quoted regions do not separate, and a doubled
/// quote character collapses to a single literal quote in the output (the
/// surrounding delimiters are kept for [`coerce_field`] to classify on).
pub fn split_fields(tuple: &str) -> Vec<String> {
    let trimmed = tuple.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);
    if inner.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut acc = String::new();
    let mut quote: Option<char> = None;
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) => {
                if ch == q {
                    if chars.next_if_eq(&q).is_some() {
                        acc.push(q); // '' or "" becomes one literal quote
                    } else {
                        quote = None;
                        acc.push(ch);
                    }
                } else {
                    acc.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    acc.push(ch);
                }
                ',' => fields.push(std::mem::take(&mut acc)),
                _ => acc.push(ch),
            },
        }
    }
    fields.push(acc);
    fields
}

/// Classify and convert one raw field into a [`Value`].
pub fn coerce_field(raw: &str) -> Value {
    let field = raw.trim();

    if field.eq_ignore_ascii_case("NULL") {
        return Value::Null;
    }

    if is_digits(field) {
        if let Ok(n) = field.parse::<i64>() {
            return Value::Integer(n);
        }
        return Value::Text(field.to_string());
    }

    if is_decimal(field) {
        if let Ok(x) = field.parse::<f64>() {
            return Value::Float(x);
        }
        return Value::Text(field.to_string());
    }

    if let Some(text) = strip_matching_quotes(field) {
        return Value::Text(text.to_string());
    }

    // Bare identifiers occasionally show up unquoted; keep them verbatim.
    Value::Text(field.to_string())
}

/// Coerce every field of one tuple string, in order.
pub fn coerce_tuple(tuple: &str) -> Vec<Value> {
    split_fields(tuple).iter().map(|f| coerce_field(f)).collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => false,
    }
}

fn strip_matching_quotes(s: &str) -> Option<&str> {
    for q in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_fields() {
        assert_eq!(split_fields("(1,'Toyota')"), vec!["1", "'Toyota'"]);
    }

    #[test]
    fn test_split_comma_inside_quotes() {
        assert_eq!(
            split_fields("(1,'Nuts, Bolts')"),
            vec!["1", "'Nuts, Bolts'"]
        );
    }

    #[test]
    fn test_split_unescapes_doubled_quote() {
        assert_eq!(
            split_fields("(2,'O''Brien Motors')"),
            vec!["2", "'O'Brien Motors'"]
        );
    }

    #[test]
    fn test_split_empty_tuple() {
        assert!(split_fields("()").is_empty());
    }

    #[test]
    fn test_split_without_parens() {
        // Defensive path: already-stripped input still splits.
        assert_eq!(split_fields("1,2"), vec!["1", "2"]);
    }

    #[test]
    fn test_coerce_null_case_insensitive() {
        assert_eq!(coerce_field("NULL"), Value::Null);
        assert_eq!(coerce_field("null"), Value::Null);
        assert_eq!(coerce_field("Null"), Value::Null);
    }

    #[test]
    fn test_coerce_quoted_null_is_text() {
        assert_eq!(coerce_field("'NULL'"), Value::Text("NULL".to_string()));
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_field("42"), Value::Integer(42));
        assert_eq!(coerce_field("0"), Value::Integer(0));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_field("2.5"), Value::Float(2.5));
        assert_eq!(coerce_field("0.001"), Value::Float(0.001));
    }

    #[test]
    fn test_quoted_number_stays_text() {
        assert_eq!(coerce_field("'2.5'"), Value::Text("2.5".to_string()));
        assert_eq!(coerce_field("\"7\""), Value::Text("7".to_string()));
    }

    #[test]
    fn test_negative_number_is_text() {
        // The dump grammar has no sign; a signed token is opaque text.
        assert_eq!(coerce_field("-5"), Value::Text("-5".to_string()));
    }

    #[test]
    fn test_malformed_decimal_is_text() {
        assert_eq!(coerce_field("1.2.3"), Value::Text("1.2.3".to_string()));
        assert_eq!(coerce_field("1."), Value::Text("1.".to_string()));
        assert_eq!(coerce_field(".5"), Value::Text(".5".to_string()));
    }

    #[test]
    fn test_integer_overflow_is_text() {
        let huge = "99999999999999999999999999";
        assert_eq!(coerce_field(huge), Value::Text(huge.to_string()));
    }

    #[test]
    fn test_quote_stripping() {
        assert_eq!(coerce_field("'Toyota'"), Value::Text("Toyota".to_string()));
        assert_eq!(coerce_field("\"Honda\""), Value::Text("Honda".to_string()));
        assert_eq!(coerce_field("''"), Value::Text(String::new()));
    }

    #[test]
    fn test_mismatched_quotes_verbatim() {
        assert_eq!(coerce_field("'abc\""), Value::Text("'abc\"".to_string()));
        // A lone quote character is not a quoted string.
        assert_eq!(coerce_field("'"), Value::Text("'".to_string()));
    }

    #[test]
    fn test_bare_identifier_verbatim() {
        assert_eq!(
            coerce_field("CURRENT_TIMESTAMP"),
            Value::Text("CURRENT_TIMESTAMP".to_string())
        );
    }

    #[test]
    fn test_coerce_tuple_mixed() {
        assert_eq!(
            coerce_tuple("(1,2.5,'2.5')"),
            vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::Text("2.5".to_string())
            ]
        );
    }

    #[test]
    fn test_coerce_tuple_null_field() {
        assert_eq!(
            coerce_tuple("(1,NULL,'a')"),
            vec![
                Value::Integer(1),
                Value::Null,
                Value::Text("a".to_string())
            ]
        );
    }

    #[test]
    fn test_coerce_tuple_escaped_quote() {
        assert_eq!(
            coerce_tuple("(2,'O''Brien Motors')"),
            vec![
                Value::Integer(2),
                Value::Text("O'Brien Motors".to_string())
            ]
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let row = vec![
            Value::Integer(1),
            Value::Null,
            Value::Float(2.5),
            Value::Text("a".to_string()),
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[1,null,2.5,"a"]"#);
    }
}
