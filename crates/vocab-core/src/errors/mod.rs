//! Error handling for the vocabulary providers.
//! One error enum per subsystem, `thiserror` only, aggregated by [`VocabError`].

pub mod config_error;
pub mod error_code;
pub mod query_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use error_code::VocabErrorCode;
pub use query_error::QueryError;
pub use transport_error::TransportError;

/// Top-level error returned by every provider operation.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VocabError {
    fn from(err: serde_json::Error) -> Self {
        VocabError::Serialization(err.to_string())
    }
}

impl VocabErrorCode for VocabError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias.
pub type VocabResult<T> = Result<T, VocabError>;
