//! # vocab-memory
//!
//! A [`vocab_core::VocabularyProvider`] over an in-memory concept graph,
//! loaded from a JSON [`VocabularyDocument`]. Shares every normalization rule
//! with the SPARQL provider, which makes it the reference for provider
//! behavior in tests.

pub mod document;
pub mod graph;
pub mod provider;

pub use document::{NodeEntry, VocabularyDocument};
pub use graph::{EdgeKind, IndexedGraph};
pub use provider::MemoryProvider;
