//! Language tag syntax checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::QueryError;

/// Simplified BCP 47: a primary subtag followed by alphanumeric subtags.
static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").expect("language tag pattern is valid")
});

/// Validate a language tag and return it lowercased.
///
/// ```
/// use vocab_core::models::normalize_language_tag;
///
/// assert_eq!(normalize_language_tag("nl-BE").unwrap(), "nl-be");
/// assert!(normalize_language_tag("nl BE").is_err());
/// ```
pub fn normalize_language_tag(tag: &str) -> Result<String, QueryError> {
    let trimmed = tag.trim();
    if !LANGUAGE_TAG.is_match(trimmed) {
        return Err(QueryError::InvalidLanguageTag {
            tag: tag.to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}

/// Primary subtag of a language tag (`"nl-be"` → `"nl"`).
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
