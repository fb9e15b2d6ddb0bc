//! Listing options: display language, sort key, sort order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::language::normalize_language_tag;
use crate::errors::QueryError;

/// Field a listing is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Label,
    SortLabel,
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "label" => Ok(SortKey::Label),
            "sortlabel" => Ok(SortKey::SortLabel),
            _ => Err(QueryError::InvalidSortKey {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(QueryError::InvalidSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

/// Options accepted by every listing operation.
///
/// Without a sort key, records keep the order the store returned them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub language: Option<String>,
    pub sort: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Build options from loosely typed string parameters.
    pub fn parse(
        language: Option<&str>,
        sort: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            language: language.map(normalize_language_tag).transpose()?,
            sort: sort.map(str::parse).transpose()?,
            sort_order: sort_order.map(str::parse).transpose()?.unwrap_or_default(),
        })
    }

    /// Check the language tag and return a copy with it normalized.
    pub fn validated(&self) -> Result<Self, QueryError> {
        Ok(Self {
            language: self
                .language
                .as_deref()
                .map(normalize_language_tag)
                .transpose()?,
            sort: self.sort,
            sort_order: self.sort_order,
        })
    }
}
