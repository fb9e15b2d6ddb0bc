//! Store transport errors. Surfaced to callers verbatim.

use super::error_code::{self, VocabErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("store answered HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed store response: {reason}")]
    MalformedResponse { reason: String },
}

impl VocabErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => error_code::TRANSPORT_NETWORK,
            Self::Timeout { .. } => error_code::TRANSPORT_TIMEOUT,
            Self::HttpStatus { .. } => error_code::TRANSPORT_STATUS,
            Self::MalformedResponse { .. } => error_code::MALFORMED_RESPONSE,
        }
    }
}
