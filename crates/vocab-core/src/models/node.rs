use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::labels::select_label;

/// What a graph resource is within the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Concept,
    Collection,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Concept => "concept",
            NodeKind::Collection => "collection",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A language-tagged label. An empty `language` means the literal was untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    #[serde(default)]
    pub language: String,
}

impl Label {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}

/// A concept or collection with its full label set and relations.
///
/// Label maps are keyed by lowercased language tag, one entry per language.
/// Relations hold scheme-local ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub sort_labels: BTreeMap<String, String>,
    #[serde(default)]
    pub alt_labels: Vec<Label>,
    #[serde(default)]
    pub broader: Vec<String>,
    #[serde(default)]
    pub narrower: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub member_of: Vec<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, uri: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            kind,
            labels: BTreeMap::new(),
            sort_labels: BTreeMap::new(),
            alt_labels: Vec::new(),
            broader: Vec::new(),
            narrower: Vec::new(),
            related: Vec::new(),
            members: Vec::new(),
            member_of: Vec::new(),
        }
    }

    /// Builder-style preferred label.
    pub fn with_label(mut self, language: &str, text: impl Into<String>) -> Self {
        self.add_label(language, text);
        self
    }

    /// Builder-style sort label.
    pub fn with_sort_label(mut self, language: &str, text: impl Into<String>) -> Self {
        self.add_sort_label(language, text);
        self
    }

    /// Record a preferred label. The first label seen for a language wins.
    pub fn add_label(&mut self, language: &str, text: impl Into<String>) {
        self.labels
            .entry(language.to_ascii_lowercase())
            .or_insert_with(|| text.into());
    }

    /// Record a sort label. The first label seen for a language wins.
    pub fn add_sort_label(&mut self, language: &str, text: impl Into<String>) {
        self.sort_labels
            .entry(language.to_ascii_lowercase())
            .or_insert_with(|| text.into());
    }

    pub fn is_concept(&self) -> bool {
        self.kind == NodeKind::Concept
    }

    pub fn is_collection(&self) -> bool {
        self.kind == NodeKind::Collection
    }

    /// Display label for `language`, falling back to `default_language` and then `en`.
    pub fn label(&self, language: Option<&str>, default_language: &str) -> Option<&str> {
        select_label(&self.labels, language, default_language)
    }

    /// Sort label in the same fallback chain, else the display label.
    pub fn sort_label(&self, language: Option<&str>, default_language: &str) -> Option<&str> {
        select_label(&self.sort_labels, language, default_language)
            .or_else(|| self.label(language, default_language))
    }
}
