use serde::{Deserialize, Serialize};

/// Where the vocabulary lives in the triple store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SparqlConfig {
    /// SPARQL query endpoint. Required by the SPARQL provider.
    #[serde(alias = "sparqlEndpoint")]
    pub endpoint: Option<String>,
    /// Named graph holding the vocabulary. Required by the SPARQL provider.
    #[serde(alias = "defaultGraph")]
    pub default_graph: Option<String>,
    /// Concept scheme URI, restricts top concepts to one scheme.
    #[serde(alias = "conceptScheme")]
    pub concept_scheme: Option<String>,
    /// Predicate carrying scheme-local ids. Default: `dcterms:identifier`.
    pub identifier_predicate: Option<String>,
    /// Predicate carrying sort labels. Unset means `sortlabel` sorts on the display label.
    pub sort_label_predicate: Option<String>,
}
