//! Completion service configuration
//!
//! One secret (the API key) and one feature flag (AI preferred vs rules-only).
//! Both are optional; absence degrades to the rule-based path.

use std::time::Duration;
use crate::{
    COMPLETION_TIMEOUT_SECS, DEFAULT_COMPLETION_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_REFERER, DEFAULT_TITLE, PLACEHOLDER_API_KEY,
};

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_MODEL: &str = "CAROUSEL_MODEL";
pub const ENV_ENDPOINT: &str = "CAROUSEL_ENDPOINT";
pub const ENV_RULES_ONLY: &str = "CAROUSEL_RULES_ONLY";

/// Settings for the AI-delegated segmenter
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Sent as `HTTP-Referer`
    pub referer: String,
    /// Sent as `X-Title`
    pub title: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_COMPLETION_ENDPOINT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: Duration::from_secs(COMPLETION_TIMEOUT_SECS),
        }
    }
}

impl AiConfig {
    /// Defaults with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Read key, model and endpoint from the environment
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: std::env::var(ENV_API_KEY).ok(),
            ..Default::default()
        };
        if let Ok(model) = std::env::var(ENV_MODEL) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Usable key: present, non-blank, not the placeholder
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }
}

/// Feature flag: is the AI path preferred?
pub fn prefer_ai_from_env() -> bool {
    match std::env::var(ENV_RULES_ONLY) {
        Ok(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_COMPLETION_ENDPOINT);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_placeholder_is_not_a_credential() {
        assert!(!AiConfig::new(PLACEHOLDER_API_KEY).has_credential());
        assert!(!AiConfig::new("   ").has_credential());
        assert!(!AiConfig::new("").has_credential());
    }

    #[test]
    fn test_real_key_is_trimmed() {
        let config = AiConfig::new("  sk-or-v1-abc \n");
        assert_eq!(config.credential(), Some("sk-or-v1-abc"));
    }
}
