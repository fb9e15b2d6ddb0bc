//! Label fallback: requested language, provider default, `en`.

use std::collections::BTreeMap;

use crate::constants::FALLBACK_LANGUAGE;
use crate::models::language::primary_subtag;

/// Pick the label to display for `requested`.
///
/// Each language in the chain `requested → default_language → en` is tried
/// first as an exact (case-insensitive) tag, then by primary subtag, so `nl`
/// finds an `nl-BE` label and `nl-BE` finds an `nl` label. Untagged literals
/// are never chosen. `None` means the node has no usable label.
pub fn select_label<'a>(
    labels: &'a BTreeMap<String, String>,
    requested: Option<&str>,
    default_language: &str,
) -> Option<&'a str> {
    requested
        .into_iter()
        .chain([default_language, FALLBACK_LANGUAGE])
        .filter(|lang| !lang.is_empty())
        .find_map(|lang| exact(labels, lang).or_else(|| by_primary_subtag(labels, lang)))
}

fn exact<'a>(labels: &'a BTreeMap<String, String>, lang: &str) -> Option<&'a str> {
    labels
        .iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(lang))
        .map(|(_, text)| text.as_str())
}

fn by_primary_subtag<'a>(labels: &'a BTreeMap<String, String>, lang: &str) -> Option<&'a str> {
    let wanted = primary_subtag(lang);
    labels
        .iter()
        .filter(|(tag, _)| !tag.is_empty())
        .find(|(tag, _)| primary_subtag(tag).eq_ignore_ascii_case(wanted))
        .map(|(_, text)| text.as_str())
}
