//! Top-level configuration with layered resolution.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ProviderConfig, SparqlConfig, TransportConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::models::{normalize_language_tag, ConceptSchemeHandle, ProviderMetadata};

/// Metadata keys accepted by [`VocabConfig::from_metadata`].
pub mod keys {
    pub const SPARQL_ENDPOINT: &str = "sparqlEndpoint";
    pub const DEFAULT_GRAPH: &str = "defaultGraph";
    pub const CONCEPT_SCHEME: &str = "conceptScheme";
    pub const DEFAULT_LANGUAGE: &str = "defaultLanguage";
    pub const ID: &str = "id";
}

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VOCAB_*`)
/// 2. Project config (`vocab.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabConfig {
    pub provider: ProviderConfig,
    pub sparql: SparqlConfig,
    pub transport: TransportConfig,
}

impl VocabConfig {
    /// Load configuration with layered resolution and validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            let file_config = Self::from_file(&project_config_path)?;
            Self::merge(&mut config, &file_config);
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Build a configuration from a flat metadata mapping.
    ///
    /// `sparqlEndpoint` and `defaultGraph` are required.
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let required = |key: &str| {
            metadata
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .ok_or_else(|| ConfigError::MissingKey {
                    key: key.to_string(),
                })
        };

        let config = Self {
            provider: ProviderConfig {
                id: metadata.get(keys::ID).cloned(),
                default_language: metadata.get(keys::DEFAULT_LANGUAGE).cloned(),
            },
            sparql: SparqlConfig {
                endpoint: Some(required(keys::SPARQL_ENDPOINT)?),
                default_graph: Some(required(keys::DEFAULT_GRAPH)?),
                concept_scheme: metadata.get(keys::CONCEPT_SCHEME).cloned(),
                ..Default::default()
            },
            transport: TransportConfig::default(),
        };
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values that are present.
    pub fn validate(config: &VocabConfig) -> Result<(), ConfigError> {
        if let Some(ref lang) = config.provider.default_language {
            normalize_language_tag(lang).map_err(|_| ConfigError::ValidationFailed {
                field: "provider.default_language".to_string(),
                message: format!("'{lang}' is not a language tag"),
            })?;
        }
        if let Some(ref endpoint) = config.sparql.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::ValidationFailed {
                    field: "sparql.endpoint".to_string(),
                    message: "must be an http(s) URL".to_string(),
                });
            }
        }
        if config.transport.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transport.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.transport.initial_backoff() > config.transport.max_backoff() {
            return Err(ConfigError::ValidationFailed {
                field: "transport.initial_backoff_ms".to_string(),
                message: "must not exceed transport.max_backoff_ms".to_string(),
            });
        }
        Ok(())
    }

    /// The scheme handle a SPARQL provider is built on.
    /// Fails when the endpoint or the graph is missing.
    pub fn scheme_handle(&self) -> Result<ConceptSchemeHandle, ConfigError> {
        let endpoint = self
            .sparql
            .endpoint
            .clone()
            .ok_or_else(|| ConfigError::MissingKey {
                key: keys::SPARQL_ENDPOINT.to_string(),
            })?;
        let graph = self
            .sparql
            .default_graph
            .clone()
            .ok_or_else(|| ConfigError::MissingKey {
                key: keys::DEFAULT_GRAPH.to_string(),
            })?;
        Ok(ConceptSchemeHandle {
            endpoint,
            graph,
            scheme_uri: self.sparql.concept_scheme.clone(),
        })
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: self.provider.effective_id(),
            default_language: self.provider.effective_default_language(),
            concept_scheme: self.sparql.concept_scheme.clone(),
        }
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut VocabConfig, other: &VocabConfig) {
        // Provider
        if other.provider.id.is_some() {
            base.provider.id = other.provider.id.clone();
        }
        if other.provider.default_language.is_some() {
            base.provider.default_language = other.provider.default_language.clone();
        }

        // SPARQL
        if other.sparql.endpoint.is_some() {
            base.sparql.endpoint = other.sparql.endpoint.clone();
        }
        if other.sparql.default_graph.is_some() {
            base.sparql.default_graph = other.sparql.default_graph.clone();
        }
        if other.sparql.concept_scheme.is_some() {
            base.sparql.concept_scheme = other.sparql.concept_scheme.clone();
        }
        if other.sparql.identifier_predicate.is_some() {
            base.sparql.identifier_predicate = other.sparql.identifier_predicate.clone();
        }
        if other.sparql.sort_label_predicate.is_some() {
            base.sparql.sort_label_predicate = other.sparql.sort_label_predicate.clone();
        }

        // Transport
        if other.transport.timeout_ms.is_some() {
            base.transport.timeout_ms = other.transport.timeout_ms;
        }
        if other.transport.max_retries.is_some() {
            base.transport.max_retries = other.transport.max_retries;
        }
        if other.transport.initial_backoff_ms.is_some() {
            base.transport.initial_backoff_ms = other.transport.initial_backoff_ms;
        }
        if other.transport.max_backoff_ms.is_some() {
            base.transport.max_backoff_ms = other.transport.max_backoff_ms;
        }
        if other.transport.user_agent.is_some() {
            base.transport.user_agent = other.transport.user_agent.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VOCAB_SPARQL_ENDPOINT`, `VOCAB_TRANSPORT_TIMEOUT_MS`, etc.
    fn apply_env_overrides(config: &mut VocabConfig) {
        if let Ok(val) = std::env::var("VOCAB_PROVIDER_ID") {
            config.provider.id = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_DEFAULT_LANGUAGE") {
            config.provider.default_language = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_SPARQL_ENDPOINT") {
            config.sparql.endpoint = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_SPARQL_DEFAULT_GRAPH") {
            config.sparql.default_graph = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_SPARQL_CONCEPT_SCHEME") {
            config.sparql.concept_scheme = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_SPARQL_IDENTIFIER_PREDICATE") {
            config.sparql.identifier_predicate = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_SPARQL_SORT_LABEL_PREDICATE") {
            config.sparql.sort_label_predicate = Some(val);
        }
        if let Ok(val) = std::env::var("VOCAB_TRANSPORT_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.transport.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VOCAB_TRANSPORT_MAX_RETRIES") {
            if let Ok(v) = val.parse::<u32>() {
                config.transport.max_retries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VOCAB_TRANSPORT_INITIAL_BACKOFF_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.transport.initial_backoff_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VOCAB_TRANSPORT_MAX_BACKOFF_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.transport.max_backoff_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VOCAB_TRANSPORT_USER_AGENT") {
            config.transport.user_agent = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
