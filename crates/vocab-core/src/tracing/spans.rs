//! Span definitions per provider operation.

/// Span around one provider operation.
#[macro_export]
macro_rules! provider_span {
    ($operation:expr, $provider:expr) => {
        tracing::info_span!("vocab.provider", operation = $operation, provider = %$provider)
    };
}

/// Span around one store round trip.
#[macro_export]
macro_rules! query_span {
    ($request_id:expr) => {
        tracing::debug_span!("vocab.query", request_id = %$request_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROVIDER: &str = "vocab.provider";
    pub const QUERY: &str = "vocab.query";
}
