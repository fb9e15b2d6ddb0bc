//! Errors in caller-supplied query parameters.

use super::error_code::{self, VocabErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid IRI: {value}")]
    InvalidIri { value: String },

    #[error("invalid language tag: {tag}")]
    InvalidLanguageTag { tag: String },

    #[error("invalid sort key '{value}', expected id, label or sortlabel")]
    InvalidSortKey { value: String },

    #[error("invalid sort order '{value}', expected asc or desc")]
    InvalidSortOrder { value: String },

    #[error("invalid type filter '{value}', expected concept, collection or all")]
    InvalidTypeFilter { value: String },

    #[error("invalid collection depth '{value}', expected members or all")]
    InvalidDepth { value: String },

    #[error("no collection with id {id} in this vocabulary")]
    UnknownCollection { id: String },
}

impl VocabErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCollection { .. } => error_code::UNKNOWN_COLLECTION,
            _ => error_code::INVALID_QUERY,
        }
    }
}
