//! Token usage and call accounting for a chat session.

use crate::TokenUsage;

/// Tracks cumulative token usage and provider call outcomes.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    answered: u64,
    failed: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call that returned an answer.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.answered += 1;
    }

    /// Record a call that failed before producing an answer.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Calls made to the provider, successful or not.
    pub fn call_count(&self) -> u64 {
        self.answered + self.failed
    }

    pub fn failure_count(&self) -> u64 {
        self.failed
    }
}
