//! HTTP transport with timeout, gzip, and optional retry with exponential backoff.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use vocab_core::config::TransportConfig;
use vocab_core::errors::TransportError;

use super::protocol::{SelectResults, RESULTS_MEDIA_TYPE};
use super::SparqlTransport;

/// SPARQL protocol client: form-encoded POST of `query` and `default-graph-uri`.
///
/// 4xx answers fail at once. Connection failures and 5xx answers are retried
/// up to `max_retries` times, doubling the pause each time up to
/// `max_backoff`. A request that exceeds the timeout is never retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, config: &TransportConfig) -> Result<Self, TransportError> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| TransportError::Network {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            max_retries: config.max_retries(),
            initial_backoff: config.initial_backoff(),
            max_backoff: config.max_backoff(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn attempt(&self, query: &str, graph: &str) -> Result<SelectResults, Attempt> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, RESULTS_MEDIA_TYPE)
            .form(&[("query", query), ("default-graph-uri", graph)])
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().map_err(|e| self.classify(e))?;
            return SelectResults::from_json(&body).map_err(Attempt::Fatal);
        }

        let body = response.text().unwrap_or_default();
        let err = TransportError::HttpStatus {
            status: status.as_u16(),
            body,
        };
        if status.is_server_error() {
            Err(Attempt::Retryable(err))
        } else {
            Err(Attempt::Fatal(err))
        }
    }

    fn classify(&self, err: reqwest::Error) -> Attempt {
        if err.is_timeout() {
            Attempt::Fatal(TransportError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })
        } else {
            Attempt::Retryable(TransportError::Network {
                reason: err.to_string(),
            })
        }
    }
}

/// Outcome of one failed round trip.
enum Attempt {
    Retryable(TransportError),
    Fatal(TransportError),
}

impl SparqlTransport for HttpTransport {
    fn select(&self, query: &str, graph: &str) -> Result<SelectResults, TransportError> {
        let mut backoff = self.initial_backoff;
        let mut attempt = 0u32;

        loop {
            match self.attempt(query, graph) {
                Ok(results) => return Ok(results),
                Err(Attempt::Fatal(err)) => return Err(err),
                Err(Attempt::Retryable(err)) => {
                    if attempt >= self.max_retries {
                        return Err(err);
                    }
                    attempt += 1;
                    tracing::debug!(
                        attempt,
                        max_retries = self.max_retries,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "retrying store request"
                    );
                    std::thread::sleep(backoff);
                    backoff = (backoff * 2).min(self.max_backoff);
                }
            }
        }
    }
}
