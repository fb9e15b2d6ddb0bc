//! # vocab-core
//!
//! Foundation crate for the vocabulary providers.
//! Defines the data model, the provider trait, errors, config, tracing setup,
//! and the store-independent half of result normalization (label fallback,
//! type tags, sorting, transitive closure).

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::VocabConfig;
pub use errors::{VocabError, VocabResult};
pub use models::{
    ConceptSchemeHandle, FindQuery, ListOptions, Node, NodeKind, ProviderMetadata, ResultRecord,
    SortKey, SortOrder,
};
pub use traits::VocabularyProvider;
