//! AI engine for the SGWI paper assistant.
//!
//! Provides:
//! - The `AnswerProvider` seam and its Gemini-backed implementation
//! - The paper context the assistant answers from
//! - A rolling-window request quota
//! - The conversation session manager that ties them together

pub mod agent;
pub mod gemini;
pub mod paper;
pub mod rate_limit;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use agent::PaperAgent;
pub use gemini::{GeminiClient, GeminiConfig};
pub use paper::PaperInfo;
pub use rate_limit::RequestLog;
pub use session::{ChatSession, SessionEvent, SubmitOutcome};
pub use token_tracker::TokenTracker;

/// Something that can answer a single free-text question.
///
/// Implementations own any fixed context (system prompt, credentials).
/// The session manager treats every `Err` as a call failure and never
/// shows its text to the user.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn ask(&self, question: &str) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

impl AiResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Missing credential: {0}")]
    MissingCredential(String),
}
