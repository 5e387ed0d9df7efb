//! Answer provider (Gemini) configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the generative-language backend.
///
/// The credential itself is never stored in the file, only the name of the
/// environment variable that carries it. `API_KEY` is tried as a fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub api_key_env: String,
    /// Overrides the Generative Language API endpoint (proxies, tests).
    pub base_url: Option<String>,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.3,
            max_output_tokens: 2048,
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
