//! Trace API configuration

use serde::{Deserialize, Serialize};

/// Where traces are fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the service exposing `/api/traces`
    pub base_url: String,
    /// Name of an env var holding a bearer token, if the endpoint needs one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
}

impl ApiConfig {
    /// Resolve the bearer token from `token_env`, if configured and set.
    pub fn bearer_token(&self) -> Option<String> {
        self.token_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|token| !token.is_empty())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            token_env: None,
        }
    }
}
