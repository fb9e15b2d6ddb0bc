//! Observability: `tracing` with `EnvFilter`, plus span names per provider operation.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with_filter};
