//! # vocab-sparql
//!
//! SKOS vocabulary provider over a SPARQL endpoint.
//!
//! - [`query`]: builds SELECT queries, never executes them.
//! - [`transport`]: the [`SparqlTransport`] seam and its reqwest implementation.
//! - [`rows`]: decodes result bindings into typed rows and assembles nodes.
//! - [`provider`]: [`SparqlProvider`], the [`vocab_core::VocabularyProvider`] implementation.

pub mod provider;
pub mod query;
pub mod rows;
pub mod transport;

pub use provider::SparqlProvider;
pub use query::QueryBuilder;
pub use transport::{HttpTransport, SelectResults, SparqlTransport};
