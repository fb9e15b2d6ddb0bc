//! SPARQL 1.1 Query Results JSON Format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vocab_core::errors::TransportError;

/// Media type requested from the endpoint.
pub const RESULTS_MEDIA_TYPE: &str = "application/sparql-results+json";

/// Response to a SELECT query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectResults {
    #[serde(default)]
    pub head: Head,
    pub results: Bindings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// One solution: variable name to bound term. Unbound variables are absent.
pub type Binding = HashMap<String, RdfTerm>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
    Uri,
    Literal,
    /// Pre-1.1 endpoints still send this for datatyped literals.
    TypedLiteral,
    Bnode,
}

/// A bound RDF term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdfTerm {
    #[serde(rename = "type")]
    pub kind: TermKind,
    pub value: String,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl RdfTerm {
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Uri,
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    pub fn literal(value: impl Into<String>, lang: Option<&str>) -> Self {
        Self {
            kind: TermKind::Literal,
            value: value.into(),
            lang: lang.map(str::to_string),
            datatype: None,
        }
    }

    pub fn is_iri(&self) -> bool {
        self.kind == TermKind::Uri
    }
}

impl SelectResults {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::MalformedResponse {
            reason: format!("not a SPARQL JSON result set: {e}"),
        })
    }

    pub fn rows(&self) -> &[Binding] {
        &self.results.bindings
    }

    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }
}
