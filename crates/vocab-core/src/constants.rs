/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Last language tried before a node is considered unlabeled.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Default language of a provider when the config names none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default provider id.
pub const DEFAULT_PROVIDER_ID: &str = "vocab";

/// Default request timeout for the store transport (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Initial retry backoff for the store transport (milliseconds).
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

/// Upper bound on retry backoff for the store transport (milliseconds).
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 10_000;

/// Maximum number of IRIs placed in a single `VALUES` block.
pub const MAX_VALUES_PER_QUERY: usize = 200;

/// Config file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "vocab.toml";
