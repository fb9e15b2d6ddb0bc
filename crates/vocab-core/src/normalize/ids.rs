//! Type-agnostic id comparison. Callers may pass `"5"` for a stored `5`.

use std::cmp::Ordering;

fn as_integer(id: &str) -> Option<i128> {
    id.trim().parse::<i128>().ok()
}

/// Canonical form used as a lookup key: trimmed, integers without leading zeros.
pub fn canonical_id(id: &str) -> String {
    match as_integer(id) {
        Some(n) => n.to_string(),
        None => id.trim().to_string(),
    }
}

/// Two ids are equal when their trimmed strings match or they denote the same integer.
pub fn ids_match(a: &str, b: &str) -> bool {
    if a.trim() == b.trim() {
        return true;
    }
    matches!((as_integer(a), as_integer(b)), (Some(x), Some(y)) if x == y)
}

/// Integers compare numerically and sort before non-numeric ids, which compare lexically.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (as_integer(a), as_integer(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
