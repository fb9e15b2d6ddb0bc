use serde::{Deserialize, Serialize};

/// Identifies the graph a provider reads from. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSchemeHandle {
    /// SPARQL endpoint address.
    pub endpoint: String,
    /// Named graph queried as the default graph.
    pub graph: String,
    /// Concept scheme URI, when the graph holds more than one scheme.
    pub scheme_uri: Option<String>,
}

impl ConceptSchemeHandle {
    pub fn new(endpoint: impl Into<String>, graph: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            graph: graph.into(),
            scheme_uri: None,
        }
    }

    pub fn with_scheme(mut self, scheme_uri: impl Into<String>) -> Self {
        self.scheme_uri = Some(scheme_uri.into());
        self
    }
}

/// Descriptive metadata every provider exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Vocabulary id, unique among providers.
    pub id: String,
    /// Language used when a caller asks for none (or for one that is missing).
    pub default_language: String,
    /// Concept scheme URI, if known.
    pub concept_scheme: Option<String>,
}

impl ProviderMetadata {
    pub fn new(id: impl Into<String>, default_language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_language: default_language.into(),
            concept_scheme: None,
        }
    }
}
