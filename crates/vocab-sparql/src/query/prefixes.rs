//! Namespaces used by the generated queries.

pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const DCTERMS_IDENTIFIER: &str = "http://purl.org/dc/terms/identifier";

/// Prologue shared by every query.
pub fn prologue() -> String {
    format!("PREFIX skos: <{SKOS}>\nPREFIX rdf: <{RDF}>\nPREFIX xsd: <{XSD}>\n")
}
