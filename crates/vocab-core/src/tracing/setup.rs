//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads `VOCAB_LOG` for per-module levels, e.g.
/// `VOCAB_LOG=vocab_sparql=debug,vocab_core=info`. Falls back to `info` when
/// `VOCAB_LOG` is unset or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VOCAB_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
        install(filter, false);
    });
}

/// Install the global subscriber with an explicit filter and JSON output.
/// Later calls, and calls after [`init_tracing`], are no-ops.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        install(EnvFilter::new(filter), true);
    });
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    if result.is_err() {
        // Another subscriber was installed by the host application.
        tracing::debug!("global tracing subscriber already set");
    }
}
