//! Reduce an rdf:type IRI to a short tag.

use crate::models::NodeKind;

/// The fragment after the last `#` or `/`, lowercased.
///
/// ```
/// use vocab_core::normalize::type_tag;
///
/// assert_eq!(type_tag("http://www.w3.org/2004/02/skos/core#Concept"), "concept");
/// assert_eq!(type_tag("http://example.org/types/OrderedCollection"), "orderedcollection");
/// ```
pub fn type_tag(type_iri: &str) -> String {
    let start = type_iri.rfind(&['#', '/'][..]).map(|i| i + 1).unwrap_or(0);
    type_iri[start..].to_lowercase()
}

/// Only `concept` and `collection` are valid kinds; anything else is rejected.
pub fn derive_kind(type_iri: &str) -> Option<NodeKind> {
    match type_tag(type_iri).as_str() {
        "concept" => Some(NodeKind::Concept),
        "collection" => Some(NodeKind::Collection),
        _ => None,
    }
}
