//! Gemini API client configuration.

use std::fmt;
use std::time::Duration;

use crate::AiError;

/// Variable tried when the configured credential variable is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
            base_url: super::client::GEMINI_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    /// Create config from the environment.
    ///
    /// Resolution order:
    /// 1. the variable named `var`
    /// 2. `API_KEY`
    ///
    /// Blank values count as unset.
    pub fn from_env(var: &str) -> Result<Self, AiError> {
        [var, FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter(|name| !name.is_empty())
            .find_map(|name| {
                std::env::var(name)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .map(Self::new)
            .ok_or_else(|| {
                AiError::MissingCredential(format!(
                    "Gemini API not configured. Set {var} or {FALLBACK_API_KEY_ENV}."
                ))
            })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}
