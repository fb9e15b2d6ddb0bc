//! Configuration errors.

use std::io;
use std::path::Path;

use super::error_code::{self, VocabErrorCode};

/// Errors raised while loading or validating provider configuration.
/// Always fatal: a provider is never constructed from an invalid config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration key: {key}")]
    MissingKey { key: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("cannot read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl ConfigError {
    /// A failed read of `path`. Only a missing file is `FileNotFound`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::ReadFailed {
                path,
                message: err.to_string(),
            },
        }
    }
}

impl VocabErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingKey { .. } => error_code::CONFIG_MISSING_KEY,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
