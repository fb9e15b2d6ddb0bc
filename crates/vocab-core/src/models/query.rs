//! Find queries.
//!
//! A [`FindQuery`] deserializes from the JSON shape callers already use:
//!
//! ```
//! use vocab_core::models::{Depth, FindQuery, TypeFilter};
//!
//! let q: FindQuery = serde_json::from_str(
//!     r#"{"type": "concept", "collection": {"id": 5, "depth": "all"}}"#,
//! ).unwrap();
//! assert_eq!(q.type_filter(), TypeFilter::Concept);
//! let coll = q.collection.unwrap();
//! assert_eq!(coll.id, "5");
//! assert_eq!(coll.depth, Depth::All);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id_format;
use super::node::NodeKind;
use crate::errors::QueryError;

/// Restrict results to a node kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    Concept,
    Collection,
    #[default]
    All,
}

impl TypeFilter {
    pub fn matches(&self, kind: NodeKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Concept => kind == NodeKind::Concept,
            TypeFilter::Collection => kind == NodeKind::Collection,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concept" => Ok(TypeFilter::Concept),
            "collection" => Ok(TypeFilter::Collection),
            "all" => Ok(TypeFilter::All),
            _ => Err(QueryError::InvalidTypeFilter {
                value: s.to_string(),
            }),
        }
    }
}

/// How far collection membership reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Direct members only.
    #[default]
    Members,
    /// Direct members plus everything their expansion reaches.
    All,
}

impl FromStr for Depth {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "members" => Ok(Depth::Members),
            "all" => Ok(Depth::All),
            _ => Err(QueryError::InvalidDepth {
                value: s.to_string(),
            }),
        }
    }
}

/// How the label filter compares against the resolved display label.
/// Both modes ignore case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Contains,
    Exact,
}

impl MatchType {
    pub fn matches(&self, label: &str, needle: &str) -> bool {
        let label = label.to_lowercase();
        let needle = needle.to_lowercase();
        match self {
            MatchType::Contains => label.contains(&needle),
            MatchType::Exact => label == needle,
        }
    }
}

/// Collection scope of a find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFilter {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    #[serde(default)]
    pub depth: Depth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindQuery {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TypeFilter>,
    #[serde(rename = "match")]
    pub match_type: MatchType,
    pub collection: Option<CollectionFilter>,
}

impl FindQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn exact(mut self) -> Self {
        self.match_type = MatchType::Exact;
        self
    }

    pub fn in_collection(mut self, id: impl Into<String>, depth: Depth) -> Self {
        self.collection = Some(CollectionFilter {
            id: id.into(),
            depth,
        });
        self
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.kind.unwrap_or_default()
    }

    /// The label filter, if any. An empty label filters nothing.
    pub fn label_filter(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Does a resolved display label pass the label filter?
    pub fn label_matches(&self, label: &str) -> bool {
        match self.label_filter() {
            Some(needle) => self.match_type.matches(label, needle),
            None => true,
        }
    }
}
