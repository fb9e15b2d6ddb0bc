//! Configuration. TOML-based, layered: env > project file > defaults.

pub mod provider_config;
pub mod sparql_config;
pub mod transport_config;
pub mod vocab_config;

pub use provider_config::ProviderConfig;
pub use sparql_config::SparqlConfig;
pub use transport_config::TransportConfig;
pub use vocab_config::VocabConfig;
