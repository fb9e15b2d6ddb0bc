//! Transport layer: the store seam, the SPARQL JSON results format, and the
//! reqwest-backed HTTP client.

pub mod http_client;
pub mod protocol;

pub use http_client::HttpTransport;
pub use protocol::{Binding, Bindings, Head, RdfTerm, SelectResults, TermKind};

use vocab_core::errors::TransportError;

/// Executes SELECT queries against a store.
///
/// The provider owns its transport and never retries; any retry policy
/// belongs to the implementation.
pub trait SparqlTransport: Send + Sync {
    /// Run `query` with `graph` as the default graph.
    fn select(&self, query: &str, graph: &str) -> Result<SelectResults, TransportError>;
}

impl<T: SparqlTransport + ?Sized> SparqlTransport for std::sync::Arc<T> {
    fn select(&self, query: &str, graph: &str) -> Result<SelectResults, TransportError> {
        (**self).select(query, graph)
    }
}
