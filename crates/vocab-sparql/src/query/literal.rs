//! Safe embedding of caller-supplied values.
//!
//! Values only ever reach a query as an escaped string literal or as a
//! checked IRI reference.

use vocab_core::errors::QueryError;

/// Characters that may not appear inside an IRI reference.
const IRI_FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '^', '`', '\\'];

/// Quote `value` as a SPARQL string literal.
pub fn literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Wrap `value` as an IRI reference `<value>`.
///
/// Rejects empty values, whitespace, control characters, and the
/// delimiters that would let a value escape the reference.
pub fn iri(value: &str) -> Result<String, QueryError> {
    let invalid = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || IRI_FORBIDDEN.contains(&c));
    if invalid {
        return Err(QueryError::InvalidIri {
            value: value.to_string(),
        });
    }
    Ok(format!("<{value}>"))
}
