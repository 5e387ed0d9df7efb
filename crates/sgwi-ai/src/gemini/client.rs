//! Gemini API client struct, request building, and response parsing.

use tracing::debug;

use crate::{AiError, AiResponse, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for a single-turn question.
    pub(crate) fn build_request_body(
        &self,
        system_instruction: &str,
        question: &str,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": question }]
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if !system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_instruction }]
            });
        }

        body
    }

    /// Parse a Gemini response.
    ///
    /// A response without candidates (for example a blocked prompt) is not an
    /// error: it yields empty content and the caller decides what to show.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        if !json.is_object() {
            return Err(AiError::ParseError("response is not a JSON object".to_string()));
        }

        let mut content = String::new();
        match json["candidates"].as_array().and_then(|c| c.first()) {
            Some(first) => {
                let parts = first["content"]["parts"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default();
                for part in &parts {
                    if let Some(text) = part["text"].as_str() {
                        content.push_str(text);
                    }
                }
            }
            None => {
                let reason = json["promptFeedback"]["blockReason"]
                    .as_str()
                    .unwrap_or("unspecified");
                debug!(reason, "Gemini returned no candidates");
            }
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
