//! Google Gemini API client.
//!
//! Single-turn `generateContent` calls against the Generative Language API,
//! with the system instruction sent alongside each question.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::{GeminiConfig, FALLBACK_API_KEY_ENV};
