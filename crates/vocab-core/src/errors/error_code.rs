//! Stable error codes for callers that cannot match on Rust enums.

/// Every error enum implements this to expose a machine-readable code.
pub trait VocabErrorCode {
    /// Returns the error code string (e.g. "TRANSPORT_TIMEOUT").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_MISSING_KEY: &str = "CONFIG_MISSING_KEY";
pub const TRANSPORT_NETWORK: &str = "TRANSPORT_NETWORK";
pub const TRANSPORT_TIMEOUT: &str = "TRANSPORT_TIMEOUT";
pub const TRANSPORT_STATUS: &str = "TRANSPORT_STATUS";
pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
pub const INVALID_QUERY: &str = "INVALID_QUERY";
pub const UNKNOWN_COLLECTION: &str = "UNKNOWN_COLLECTION";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
