use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_PROVIDER_ID};

/// Provider identity and display defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Vocabulary id.
    pub id: Option<String>,
    /// Language used when a caller asks for none. Default: `en`.
    #[serde(alias = "defaultLanguage")]
    pub default_language: Option<String>,
}

impl ProviderConfig {
    pub fn effective_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| DEFAULT_PROVIDER_ID.to_string())
    }

    pub fn effective_default_language(&self) -> String {
        self.default_language
            .as_deref()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }
}
