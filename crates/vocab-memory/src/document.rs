//! JSON vocabulary documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use vocab_core::errors::{ConfigError, VocabResult};
use vocab_core::models::{id_format, Label, NodeKind};

/// A whole concept scheme: provider metadata plus its nodes in listing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyDocument {
    pub id: String,
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub concept_scheme: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

/// One concept or collection. Relations reference other entries by id and
/// may be declared from either end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub top_concept: bool,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub sort_labels: Vec<Label>,
    #[serde(default)]
    pub alt_labels: Vec<Label>,
    #[serde(default, deserialize_with = "id_format::deserialize_vec")]
    pub broader: Vec<String>,
    #[serde(default, deserialize_with = "id_format::deserialize_vec")]
    pub narrower: Vec<String>,
    #[serde(default, deserialize_with = "id_format::deserialize_vec")]
    pub related: Vec<String>,
    #[serde(default, deserialize_with = "id_format::deserialize_vec")]
    pub members: Vec<String>,
}

impl VocabularyDocument {
    pub fn from_json(json: &str) -> VocabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> VocabResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;
        Self::from_json(&content)
    }
}
